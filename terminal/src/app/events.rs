//! # Application Events
//!
//! Messages sent from background tasks to the main thread.

/// Async task results sent to main thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Ticker timer fired; apply one feed update to the coin list
    MarketTick,
}
