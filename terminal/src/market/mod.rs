//! # Market Data
//!
//! Coin records, the simulated ticker that keeps them moving, and the hand-off
//! to the external charting page.
//!
//! ## Modules
//!
//! - **[`coin`]**: `Coin`, seed list, search filter, sparkline geometry, price formatting
//! - **[`ticker`]**: `tick(coins, rng) -> coins'` and the [`SimulatedFeed`]
//! - **[`chart`]**: external chart widget configuration

pub mod chart;
pub mod coin;
pub mod ticker;

pub use chart::ChartEmbed;
pub use coin::{filter_coins, format_usd, initial_coins, sparkline_points, Coin, SPARKLINE_LEN};
pub use ticker::{tick, tick_in_place, SimulatedFeed, TickerConfig};
