use thiserror::Error;

/// Errors that can occur while loading recipe metadata or configuration.
///
/// Extraction itself never fails; missing or malformed fields come back as
/// absent values instead.
#[derive(Error, Debug)]
pub enum CardError {
    /// Input was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file could not be read
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// HTML page had no parseable JSON-LD script block
    #[error("No JSON-LD recipe metadata found in this page")]
    NoJsonLd,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
