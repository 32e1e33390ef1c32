//! # Debugging and Tracing Infrastructure
//!
//! File-based logging and in-UI diagnostics.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/aetheris.log` (daily rotation)
//! - **Frame metrics**: Rolling frame times and slow-frame counter
//! - **In-UI debug overlay**: Scene poses, ticker state, frame timing (toggle with Ctrl+D)
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `aetheris=debug,info`)
//! - `AETHERIS_LOG_DIR`: Log directory (default: `logs`)
//! - `AETHERIS_DEBUG_UI`: Start with the debug overlay open (1=on, 0=off)

pub mod config;
pub mod logger;
pub mod metrics;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use metrics::FrameMetrics;

/// Initialize the debugging system. Call once at startup before anything logs.
pub fn init() -> DebugConfig {
    init_logger()
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
