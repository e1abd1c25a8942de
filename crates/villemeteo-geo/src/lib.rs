//! Commune lookup against the French geocoding API.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeoClient;
pub use error::GeoError;
pub use types::Commune;
pub use villemeteo_core::ResultLimit;
