//! Error handling for EcoChef
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy. Delivery-side failures are
//! never surfaced to end users; the webhook boundary logs them and still
//! answers 200 so Telegram does not retry-storm.

use thiserror::Error;

/// Main error type for EcoChef operations
#[derive(Error, Debug)]
pub enum EcoChefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API call {method} failed: {description}")]
    Gateway { method: String, description: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for EcoChef operations
pub type Result<T> = std::result::Result<T, EcoChefError>;

impl EcoChefError {
    /// Check if the error is recoverable
    ///
    /// Transport faults (network, Telegram API) are transient; configuration
    /// and serialization problems are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EcoChefError::Config(_) => false,
            EcoChefError::Http(_) => true,
            EcoChefError::Gateway { .. } => true,
            EcoChefError::Serialization(_) => false,
        }
    }
}
