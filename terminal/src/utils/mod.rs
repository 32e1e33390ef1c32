//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: process-wide Tokio runtime for background timers

pub mod runtime;
