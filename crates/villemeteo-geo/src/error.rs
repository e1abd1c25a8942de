use thiserror::Error;
use villemeteo_core::{AppError, NetworkError};

/// Shown to the user whenever a commune search cannot complete.
pub const SEARCH_FAILED_MESSAGE: &str = "Erreur lors de la récupération des villes";

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Geocoding request failed: {0}")]
    Network(#[from] NetworkError),

    #[error("Invalid geocoding base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl GeoError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Network(_) => SEARCH_FAILED_MESSAGE,
            GeoError::InvalidBaseUrl { .. } | GeoError::Client(_) => {
                "Le service de recherche de communes est mal configuré."
            }
        }
    }
}

impl From<GeoError> for AppError {
    fn from(e: GeoError) -> Self {
        match e {
            GeoError::Network(_) => AppError::Search(e.user_message().to_string()),
            GeoError::InvalidBaseUrl { .. } | GeoError::Client(_) => {
                AppError::Config(villemeteo_core::ConfigError::Invalid(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_maps_to_search_message() {
        let app: AppError = GeoError::Network(NetworkError::Timeout).into();
        assert_eq!(app.user_message(), SEARCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_bad_base_url_maps_to_config_error() {
        let source = match url::Url::parse("nope") {
            Err(e) => e,
            Ok(_) => return,
        };
        let app: AppError = GeoError::InvalidBaseUrl { url: "nope".into(), source }.into();
        assert!(matches!(app, AppError::Config(_)));
    }
}
