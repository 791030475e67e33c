//! Error types for storequote

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),
}

/// Errors raised while turning a wizard form into a priceable request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// A field required by the selected storage type was not supplied.
    /// Carries the wire (camelCase) field name.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Callback requests do not produce a quote")]
    CallbackHasNoQuote,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
