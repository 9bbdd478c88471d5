//! Error taxonomy
//!
//! Most data-quality faults (unresolved entities, empty series, stale
//! responses) are values in this crate, not errors. `MacroError` covers the
//! genuine fault channels: transport, malformed JSON, and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MacroError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider response error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MacroError>;
