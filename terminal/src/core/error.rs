//! # Common Error Types
//!
//! Consolidated error handling for the Aetheris terminal.
//!
//! Almost everything the application shows is hard-coded or simulated locally, so
//! the error surface is small. What remains is categorized by source:
//!
//! - **Config**: configuration file unreadable or malformed (falls back to defaults)
//! - **Io**: log directory or config file writes
//! - **ChartWidget**: handing a symbol off to the external charting page failed
//! - **State**: lock contention or an impossible state transition
//!
//! ## Usage Pattern
//!
//! ```rust
//! use aetheris::core::error::{AppError, Result};
//!
//! fn parse_interval(raw: &str) -> Result<u64> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid tick interval: {raw}")))
//! }
//!
//! assert!(parse_interval("3000").is_ok());
//! assert!(parse_interval("soon").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// The `#[error]` attribute from `thiserror` provides `Display` and `Error`.
///
/// # Example
///
/// ```rust
/// use aetheris::core::error::AppError;
///
/// let err = AppError::ChartWidget("no browser available".to_string());
/// assert_eq!(err.to_string(), "Chart widget error: no browser available");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem failure (log directory, config persistence).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External chart hand-off failed. The in-app placeholder chart stays visible.
    #[error("Chart widget error: {0}")]
    ChartWidget(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            AppError::Config("bad json".to_string()).to_string(),
            "Config error: bad json"
        );
        assert_eq!(
            AppError::State("locked".to_string()).to_string(),
            "State error: locked"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_serde_error_maps_to_config() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
