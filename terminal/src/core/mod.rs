//! # Core Abstractions
//!
//! Error type, configuration and the market feed seam.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Persisted settings (`AppConfig`)
//! - **[`service`]**: Feed trait for swapping the price source (`MarketFeed`)
//!
//! ## Error Handling
//!
//! ```rust
//! use aetheris::core::error::{AppError, Result};
//!
//! fn parse_tick(raw: &str) -> Result<u64> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("bad tick interval: {}", raw)))
//! }
//!
//! assert!(parse_tick("3000").is_ok());
//! assert!(parse_tick("soon").is_err());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::MarketFeed;
