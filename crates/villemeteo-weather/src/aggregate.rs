//! Per-commune weather fan-out.

use futures::future::join_all;
use tracing::instrument;
use villemeteo_geo::Commune;

use crate::provider::WeatherProvider;
use crate::types::DisplayRecord;

/// Fetches forecasts for a batch of communes and merges them into
/// [`DisplayRecord`]s.
#[derive(Debug, Clone)]
pub struct WeatherAggregator {
    provider: WeatherProvider,
}

impl WeatherAggregator {
    pub fn new(provider: WeatherProvider) -> Self {
        Self { provider }
    }

    /// Issue one forecast request per commune, all at once, and wait for
    /// every one of them to settle.
    ///
    /// A failed request only drops its own commune from the output; the
    /// others keep their input order. Runs on the caller's task.
    #[instrument(skip_all, fields(communes = communes.len()), level = "info")]
    pub async fn aggregate(&self, communes: &[Commune]) -> Vec<DisplayRecord> {
        if communes.is_empty() {
            return Vec::new();
        }

        let requests = communes.iter().map(|commune| async move {
            match self.provider.daily_forecast(&commune.insee_code).await {
                Ok(forecast) => Some(DisplayRecord::new(commune.clone(), forecast)),
                Err(e) => {
                    tracing::warn!(
                        "Dropping {} ({}) from results: {}",
                        commune.name,
                        commune.insee_code,
                        e
                    );
                    None
                }
            }
        });

        let records: Vec<DisplayRecord> = join_all(requests).await.into_iter().flatten().collect();

        tracing::info!(
            "Weather resolved for {} of {} communes",
            records.len(),
            communes.len()
        );
        records
    }
}
