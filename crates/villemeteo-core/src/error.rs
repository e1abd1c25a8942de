//! Centralized error types for villemeteo.
//!
//! Each crate keeps its own error enum and converts into [`AppError`] at the
//! application edge. `user_message()` returns the text shown to the user; the
//! `Display` output keeps the technical detail for logs.

use thiserror::Error;

/// Error surfaced to the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("Config: {0}")]
    Config(#[from] ConfigError),

    /// Geocoding lookup failed; the message is already user-facing.
    #[error("Commune search failed: {0}")]
    Search(String),

    /// Reference data (population dataset, map document) could not be loaded.
    #[error("Reference data error: {0}")]
    Data(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// French text for the user. `Search` carries its own.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Search(message) => message,
            AppError::Data(_) => "Les données de référence sont illisibles.",
            AppError::Other(_) => "Une erreur est survenue.",
        }
    }
}

/// Failure of one outbound HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Could not reach service: {0}")]
    ConnectionFailed(String),

    #[error("Request exceeded the configured timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Undecodable response body: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Connexion impossible. Vérifiez votre accès à internet."
            }
            NetworkError::Timeout => "La requête a expiré. Veuillez réessayer.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "Le service rencontre des difficultés. Réessayez plus tard."
            }
            NetworkError::ServerError { .. } => "La requête a échoué. Veuillez réessayer.",
            NetworkError::InvalidResponse(_) => "Réponse inattendue du service.",
        }
    }

    /// Build a `ServerError` from a non-success HTTP status.
    pub fn from_status(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        NetworkError::ServerError {
            status: status.as_u16(),
            message: body.into(),
        }
    }
}

/// Configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A service client could not be built from the configured values.
    #[error("Unusable setting: {0}")]
    Invalid(String),

    /// `Config::validate` reported at least one error.
    #[error("Configuration rejected: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Un service est mal configuré. Vérifiez vos réglages.",
            ConfigError::Validation(_) => "Le fichier de configuration contient des erreurs.",
        }
    }
}

/// Classifies a `reqwest` failure as a [`NetworkError`].
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
