//! Error taxonomy for ladder-cut reduction and engine configuration

use thiserror::Error;

/// Errors raised by the outer-hull engine and its configuration layer
#[derive(Error, Debug)]
pub enum HullError {
    /// Mismatched, empty or non-finite coordinate input passed to `add`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed axis bounds or axis list at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to parse engine configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hull operations
pub type Result<T> = std::result::Result<T, HullError>;
