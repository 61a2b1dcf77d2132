//! Error types for core date logic

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// A Hijri date with an out-of-range month or day
    #[error("Invalid Hijri date: {year}-{month}-{day}")]
    InvalidHijriDate {
        /// Hijri year
        year: i32,
        /// Month number (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
