//! # Service Traits
//!
//! Seams for swapping collaborators in tests.

use crate::market::Coin;

/// Source of price movement for the markets screen.
///
/// The shipped implementation is [`crate::market::SimulatedFeed`], a local random
/// walk. A real exchange feed would implement the same trait and keep the UI
/// untouched.
pub trait MarketFeed: Send {
    /// Apply one update to the collection in place.
    fn advance(&mut self, coins: &mut [Coin]);

    /// Short label shown in the markets header
    fn name(&self) -> &'static str;
}
