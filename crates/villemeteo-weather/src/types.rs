use serde::{Deserialize, Serialize};
use villemeteo_core::{AppError, NetworkError};
use villemeteo_geo::Commune;

/// One day of forecast. Index 0 of a forecast sequence is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Day offset from today, when the provider sends it
    #[serde(default)]
    pub day: Option<u8>,
    /// Minimum temperature, °C
    #[serde(rename = "tmin")]
    pub t_min: f64,
    /// Maximum temperature, °C
    #[serde(rename = "tmax")]
    pub t_max: f64,
    /// Key into the weather code table, see [`crate::describe`]
    #[serde(rename = "weather")]
    pub weather_code: i32,
    /// Probability of rain, %
    #[serde(rename = "probarain", default)]
    pub rain_probability: Option<u8>,
}

/// Body of `GET /forecast/daily`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyForecastResponse {
    #[serde(default)]
    pub forecast: Vec<DailyForecast>,
}

/// A commune merged with its forecast, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub commune: Commune,
    pub forecast: Vec<DailyForecast>,
}

impl DisplayRecord {
    pub fn new(commune: Commune, forecast: Vec<DailyForecast>) -> Self {
        Self { commune, forecast }
    }

    /// Today's forecast, if the provider returned any day at all.
    pub fn today(&self) -> Option<&DailyForecast> {
        self.forecast.first()
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather request failed: {0}")]
    Network(#[from] NetworkError),

    #[error("Invalid weather base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network(_) => "Erreur lors de la récupération de la météo",
            WeatherError::InvalidBaseUrl { .. } | WeatherError::Client(_) => {
                "Le service météo est mal configuré."
            }
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(n) => AppError::Network(n),
            other => AppError::Config(villemeteo_core::ConfigError::Invalid(other.to_string())),
        }
    }
}
