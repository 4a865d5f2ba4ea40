//! # Core Error Module
//!
//! This module defines the central `LogsError` type used throughout the
//! library. It leverages `thiserror` for error message formatting.

use thiserror::Error;

/// Central error type for the `logs-ng` library.
#[derive(Debug, Error)]
pub enum LogsError {
    /// Error related to configuration loading or parsing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error opening or writing to the configured sink.
    #[error("Sink I/O error: {0}")]
    SinkError(#[from] std::io::Error),
}
