//! Integration tests for the weather fan-out using wiremock.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use villemeteo_geo::Commune;
use villemeteo_weather::{WeatherAggregator, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn commune(insee: &str, name: &str, dep: &str) -> Commune {
    Commune {
        insee_code: insee.to_string(),
        name: name.to_string(),
        department_code: dep.to_string(),
        postal_codes: vec![format!("{}000", dep)],
        population: 10_000,
    }
}

fn forecast_body(weather: i32, tmin: f64, tmax: f64) -> serde_json::Value {
    serde_json::json!({
        "city": { "name": "x" },
        "forecast": [
            { "day": 0, "tmin": tmin, "tmax": tmax, "weather": weather, "probarain": 10 },
            { "day": 1, "tmin": tmin - 1.0, "tmax": tmax + 1.0, "weather": 3, "probarain": 20 }
        ]
    })
}

async fn mount_forecast(server: &MockServer, insee: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast/daily"))
        .and(query_param("token", TOKEN))
        .and(query_param("insee", insee))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn aggregator_for(server: &MockServer) -> WeatherAggregator {
    let provider = WeatherProvider::with_base_url(&server.uri(), TOKEN, Duration::from_secs(5)).unwrap();
    WeatherAggregator::new(provider)
}

#[tokio::test]
async fn test_one_failure_among_three_is_dropped() {
    let mock_server = MockServer::start().await;

    mount_forecast(&mock_server, "35238", ResponseTemplate::new(200).set_body_json(forecast_body(1, 5.0, 12.0))).await;
    mount_forecast(&mock_server, "29019", ResponseTemplate::new(500)).await;
    mount_forecast(&mock_server, "56260", ResponseTemplate::new(200).set_body_json(forecast_body(40, 8.0, 15.0))).await;

    let communes = vec![
        commune("35238", "Rennes", "35"),
        commune("29019", "Brest", "29"),
        commune("56260", "Vannes", "56"),
    ];

    let records = aggregator_for(&mock_server).aggregate(&communes).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].commune.insee_code, "35238");
    assert_eq!(records[1].commune.insee_code, "56260");
    assert_eq!(records[0].today().map(|d| d.weather_code), Some(1));
    assert_eq!(records[1].forecast.len(), 2);
}

#[tokio::test]
async fn test_empty_input_issues_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(0, 1.0, 2.0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let records = aggregator_for(&mock_server).aggregate(&[]).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_order_follows_input_not_completion() {
    let mock_server = MockServer::start().await;

    // First commune answers last
    mount_forecast(
        &mock_server,
        "13055",
        ResponseTemplate::new(200)
            .set_body_json(forecast_body(0, 14.0, 22.0))
            .set_delay(Duration::from_millis(300)),
    )
    .await;
    mount_forecast(&mock_server, "69123", ResponseTemplate::new(200).set_body_json(forecast_body(3, 9.0, 17.0))).await;
    mount_forecast(
        &mock_server,
        "31555",
        ResponseTemplate::new(200)
            .set_body_json(forecast_body(10, 11.0, 19.0))
            .set_delay(Duration::from_millis(100)),
    )
    .await;

    let communes = vec![
        commune("13055", "Marseille", "13"),
        commune("69123", "Lyon", "69"),
        commune("31555", "Toulouse", "31"),
    ];

    let records = aggregator_for(&mock_server).aggregate(&communes).await;
    let order: Vec<&str> = records.iter().map(|r| r.commune.name.as_str()).collect();
    assert_eq!(order, vec!["Marseille", "Lyon", "Toulouse"]);
}

#[tokio::test]
async fn test_requests_run_concurrently() {
    let mock_server = MockServer::start().await;

    for insee in ["01001", "01002", "01004"] {
        mount_forecast(
            &mock_server,
            insee,
            ResponseTemplate::new(200)
                .set_body_json(forecast_body(0, 1.0, 2.0))
                .set_delay(Duration::from_millis(400)),
        )
        .await;
    }

    let communes = vec![
        commune("01001", "L'Abergement-Clémenciat", "01"),
        commune("01002", "L'Abergement-de-Varey", "01"),
        commune("01004", "Ambérieu-en-Bugey", "01"),
    ];

    let started = std::time::Instant::now();
    let records = aggregator_for(&mock_server).aggregate(&communes).await;
    let elapsed = started.elapsed();

    assert_eq!(records.len(), 3);
    // Sequential dispatch would take at least 1200ms
    assert!(elapsed < Duration::from_millis(1100), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_all_failures_yield_empty_output() {
    let mock_server = MockServer::start().await;

    mount_forecast(&mock_server, "75056", ResponseTemplate::new(401)).await;
    mount_forecast(&mock_server, "2A004", ResponseTemplate::new(200).set_body_string("not json")).await;

    let communes = vec![commune("75056", "Paris", "75"), commune("2A004", "Ajaccio", "2A")];
    let records = aggregator_for(&mock_server).aggregate(&communes).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_timeout_is_isolated() {
    let mock_server = MockServer::start().await;

    mount_forecast(
        &mock_server,
        "67482",
        ResponseTemplate::new(200)
            .set_body_json(forecast_body(0, 1.0, 2.0))
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    mount_forecast(&mock_server, "68224", ResponseTemplate::new(200).set_body_json(forecast_body(0, 3.0, 4.0))).await;

    let provider =
        WeatherProvider::with_base_url(&mock_server.uri(), TOKEN, Duration::from_millis(300)).unwrap();
    let records = WeatherAggregator::new(provider)
        .aggregate(&[commune("67482", "Strasbourg", "67"), commune("68224", "Mulhouse", "68")])
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].commune.name, "Mulhouse");
}

#[tokio::test]
async fn test_provider_reports_status() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, "44109", ResponseTemplate::new(404)).await;

    let provider = WeatherProvider::with_base_url(&mock_server.uri(), TOKEN, Duration::from_secs(5)).unwrap();
    let err = provider.daily_forecast("44109").await.unwrap_err();
    assert!(matches!(err, WeatherError::Network(_)));
    assert!(err.to_string().contains("404"), "{}", err);
}
