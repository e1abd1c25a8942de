//! Search orchestration: geocoding, map fills and weather fan-out.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use villemeteo_core::{AppError, Config, ResultLimit};
use villemeteo_geo::{Commune, GeoClient};
use villemeteo_map::{recolor, FillColor, PopulationTable};
use villemeteo_weather::{DisplayRecord, WeatherAggregator, WeatherProvider};

use crate::state::{SearchGeneration, SearchState};

/// Everything one search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub generation: SearchGeneration,
    pub communes: Vec<Commune>,
    pub records: Vec<DisplayRecord>,
    pub fills: BTreeMap<u32, FillColor>,
    /// False when a newer search superseded this one before it finished;
    /// the session state then kept the newer results.
    pub applied: bool,
}

/// Owns the service clients and the current [`SearchState`].
///
/// The state lock is only held between awaits, never across one.
pub struct Session {
    geo: GeoClient,
    weather: WeatherAggregator,
    population: Arc<PopulationTable>,
    path_ids: Vec<u32>,
    state: Mutex<SearchState>,
}

impl Session {
    pub fn new(
        geo: GeoClient,
        weather: WeatherAggregator,
        population: Arc<PopulationTable>,
        path_ids: Vec<u32>,
        limit: ResultLimit,
    ) -> Self {
        Self {
            geo,
            weather,
            population,
            path_ids,
            state: Mutex::new(SearchState::new(limit)),
        }
    }

    /// Build clients and load the population dataset from configuration.
    pub fn from_config(config: &Config, path_ids: Vec<u32>) -> Result<Self, AppError> {
        let geo = GeoClient::new(&config.geo, &config.http)?;
        let provider = WeatherProvider::new(&config.weather, &config.http)?;

        let population = match &config.map.population_path {
            Some(path) => PopulationTable::load(path)?,
            None => PopulationTable::embedded()?,
        };

        Ok(Self::new(
            geo,
            WeatherAggregator::new(provider),
            Arc::new(population),
            path_ids,
            config.search.default_limit,
        ))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    pub fn set_limit(&self, limit: ResultLimit) {
        self.transition(|s| s.on_limit_changed(limit));
    }

    fn transition(&self, event: impl FnOnce(&SearchState) -> SearchState) {
        let mut state = self.state.lock();
        *state = event(&state);
    }

    /// Run a full search for `query`.
    ///
    /// A geocoding failure ends the search with an error and leaves the
    /// previous results in place. Weather failures only drop the affected
    /// communes.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, AppError> {
        let (generation, limit) = {
            let mut state = self.state.lock();
            let (next, generation) = state.on_query_changed(query).on_search();
            let limit = next.limit();
            *state = next;
            (generation, limit)
        };
        tracing::info!("Search {} for '{}' (limit {})", generation, query, limit);

        let communes = match self.geo.resolve(query, limit).await {
            Ok(communes) => communes,
            Err(e) => {
                tracing::error!("Search {} failed: {}", generation, e);
                let message = e.user_message();
                self.transition(|s| s.on_search_failed(generation, message));
                return Err(e.into());
            }
        };
        self.transition(|s| s.on_communes_resolved(generation, communes.clone()));

        let active_codes = Commune::department_codes(&communes);
        let fills = recolor(self.path_ids.iter().copied(), &self.population, &active_codes);

        let records = self.weather.aggregate(&communes).await;

        let applied = {
            let mut state = self.state.lock();
            let applied = state.is_current(generation);
            *state = state.on_weather_resolved(generation, records.clone());
            applied
        };
        if !applied {
            tracing::info!("Search {} was superseded, results discarded", generation);
        }

        Ok(SearchOutcome {
            generation,
            communes,
            records,
            fills,
            applied,
        })
    }
}
