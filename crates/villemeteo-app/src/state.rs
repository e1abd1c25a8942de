//! Search pipeline state.
//!
//! `SearchState` is never mutated in place: every event produces a new value.
//! Each search gets a [`SearchGeneration`]; events carrying an older
//! generation than the latest issued one leave the state unchanged, so a slow
//! search can never overwrite the results of a newer one.

use villemeteo_core::ResultLimit;
use villemeteo_geo::Commune;
use villemeteo_weather::DisplayRecord;

/// Token identifying one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SearchGeneration(u64);

impl SearchGeneration {
    pub fn next(self) -> Self {
        SearchGeneration(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SearchGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Resolving,
    FetchingWeather,
    Ready,
    /// Last search failed; holds the user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    limit: ResultLimit,
    generation: SearchGeneration,
    communes: Vec<Commune>,
    records: Vec<DisplayRecord>,
    phase: SearchPhase,
}

impl SearchState {
    pub fn new(limit: ResultLimit) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> ResultLimit {
        self.limit
    }

    /// Latest issued generation.
    pub fn generation(&self) -> SearchGeneration {
        self.generation
    }

    pub fn communes(&self) -> &[Commune] {
        &self.communes
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Resolving | SearchPhase::FetchingWeather)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// True if `generation` is the latest issued one.
    pub fn is_current(&self, generation: SearchGeneration) -> bool {
        self.generation == generation
    }

    pub fn on_query_changed(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Takes effect on the next search; current results are kept.
    pub fn on_limit_changed(&self, limit: ResultLimit) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    /// Start a search for the current query, superseding any in flight.
    pub fn on_search(&self) -> (Self, SearchGeneration) {
        let generation = self.generation.next();
        let next = Self {
            generation,
            phase: SearchPhase::Resolving,
            ..self.clone()
        };
        (next, generation)
    }

    /// Replace the commune list and clear the previous weather results.
    pub fn on_communes_resolved(&self, generation: SearchGeneration, communes: Vec<Commune>) -> Self {
        if !self.is_current(generation) {
            return self.clone();
        }
        let phase = if communes.is_empty() {
            SearchPhase::Ready
        } else {
            SearchPhase::FetchingWeather
        };
        Self {
            communes,
            records: Vec::new(),
            phase,
            ..self.clone()
        }
    }

    /// Record a failed lookup. Results of the previous search stay visible.
    pub fn on_search_failed(&self, generation: SearchGeneration, message: impl Into<String>) -> Self {
        if !self.is_current(generation) {
            return self.clone();
        }
        Self {
            phase: SearchPhase::Failed(message.into()),
            ..self.clone()
        }
    }

    pub fn on_weather_resolved(&self, generation: SearchGeneration, records: Vec<DisplayRecord>) -> Self {
        if !self.is_current(generation) || self.phase != SearchPhase::FetchingWeather {
            return self.clone();
        }
        Self {
            records,
            phase: SearchPhase::Ready,
            ..self.clone()
        }
    }
}
