//! Weather service for villemeteo
//!
//! Fetches daily forecasts per commune from the meteo-concept API and merges
//! them with commune data into display records.

pub mod aggregate;
pub mod nomenclature;
pub mod provider;
pub mod types;

pub use aggregate::WeatherAggregator;
pub use nomenclature::{describe, UNAVAILABLE};
pub use provider::WeatherProvider;
pub use types::*;
