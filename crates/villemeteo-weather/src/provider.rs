use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::instrument;
use url::Url;
use villemeteo_core::{HttpConfig, NetworkError, ReqwestErrorExt, WeatherConfig};

use crate::types::{DailyForecast, DailyForecastResponse, WeatherError};

/// Client for the daily forecast endpoint, keyed by INSEE code.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    token: String,
}

impl WeatherProvider {
    pub fn new(weather: &WeatherConfig, http: &HttpConfig) -> Result<Self, WeatherError> {
        let token = weather.token.clone().unwrap_or_default();
        Self::with_base_url(&weather.base_url, &token, http.timeout())
    }

    pub fn with_base_url(base_url: &str, token: &str, timeout: Duration) -> Result<Self, WeatherError> {
        Url::parse(base_url).map_err(|source| WeatherError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Fetch the daily forecast for one commune. No retry.
    #[instrument(skip(self), level = "debug")]
    pub async fn daily_forecast(&self, insee_code: &str) -> Result<Vec<DailyForecast>, WeatherError> {
        let url = format!(
            "{}/forecast/daily?token={}&insee={}",
            self.base_url,
            urlencoding::encode(&self.token),
            urlencoding::encode(insee_code)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::from_status(status, body).into());
        }

        let body: DailyForecastResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Got {} forecast days for {}", body.forecast.len(), insee_code);
        Ok(body.forecast)
    }
}
