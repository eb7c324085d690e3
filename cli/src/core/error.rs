//! # travelrs Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the application-level error types used by travelrs.
//! Route evaluation failures ("No route found", "No available trains", ...)
//! are *not* modelled here: they are ordinary values returned by the
//! `routing` module. The errors below cover the things that can actually go
//! wrong around the assistant: configuration, dataset files and console I/O.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `TravelError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_file() {
//!     return Err(TravelError::Config(format!("Data file not found: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the travelrs application.
#[derive(Error, Debug)]
pub enum TravelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid dataset '{path}': {reason}")]
    Dataset { path: String, reason: String },

    #[error("Unknown city '{name}'. Supported cities: Paris, Lyon.")]
    UnknownCity { name: String },

    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: &'static str },

    #[error("Console I/O failed: {source}")]
    Console {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = TravelError::Config("segment distance must be positive".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: segment distance must be positive"
        );

        let unknown_city = TravelError::UnknownCity {
            name: "Marseille".into(),
        };
        assert_eq!(
            unknown_city.to_string(),
            "Unknown city 'Marseille'. Supported cities: Paris, Lyon."
        );

        let bad_time = TravelError::InvalidTime {
            value: "25:00".into(),
            reason: "hour must be 0-23",
        };
        assert_eq!(bad_time.to_string(), "Invalid time '25:00': hour must be 0-23");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: TravelError = io.into();
        assert!(err.to_string().starts_with("Console I/O failed"));
    }
}
