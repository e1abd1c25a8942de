//! Geocoding API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::instrument;
use url::Url;
use villemeteo_core::{GeoConfig, HttpConfig, NetworkError, ReqwestErrorExt, ResultLimit};

use crate::error::GeoError;
use crate::types::Commune;

const USER_AGENT: &str = concat!("villemeteo/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Arc<Client>,
    base_url: String,
}

impl GeoClient {
    pub fn new(geo: &GeoConfig, http: &HttpConfig) -> Result<Self, GeoError> {
        Self::with_base_url(&geo.base_url, http.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, GeoError> {
        Url::parse(base_url).map_err(|source| GeoError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up communes whose name matches `query`, keeping at most `limit`
    /// of them in the order the API returned them.
    ///
    /// A blank query resolves to an empty list without touching the network.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, query: &str, limit: ResultLimit) -> Result<Vec<Commune>, GeoError> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Blank query, skipping geocoding request");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/communes?nom={}",
            self.base_url,
            urlencoding::encode(query)
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
            tracing::warn!("Geocoding returned status {}", status);
            return Err(NetworkError::from_status(status, body).into());
        }

        let communes: Vec<Commune> = response
            .json()
            .await
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?;

        let found = communes.len();
        let communes = limit.truncate(communes);
        tracing::info!(
            "Resolved '{}' to {} communes ({} kept, limit {})",
            query,
            found,
            communes.len(),
            limit
        );

        Ok(communes)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = GeoClient::with_base_url("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, GeoError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        // Port 9 is discard; a request would fail, so Ok proves none was sent.
        let client = GeoClient::with_base_url("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let communes = client.resolve("   ", ResultLimit::All).await.unwrap();
        assert!(communes.is_empty());
    }
}
