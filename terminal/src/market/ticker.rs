//! # Ticker Simulation
//!
//! Cosmetic random-walk over the coin collection. Every tick nudges each price by
//! a bounded uniform delta proportional to the price and rolls the sparkline
//! window forward by one synthetic sample.
//!
//! The randomness source is injected so tests can drive it with a seeded
//! generator:
//!
//! ```rust
//! use aetheris::market::{initial_coins, tick, TickerConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let coins = initial_coins();
//! let next = tick(&coins, &mut rng, &TickerConfig::default());
//! assert_eq!(next.len(), coins.len());
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::service::MarketFeed;
use crate::market::coin::Coin;

/// Ticker tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    /// Wall-clock period between ticks
    pub interval_ms: u64,
    /// Maximum drift per tick as a fraction of price (the delta spans ±half of it)
    pub jitter_fraction: f64,
    /// Prices never fall below this
    pub price_floor: f64,
    /// Lower bound for synthetic sparkline samples
    pub sample_min: f64,
    /// Upper bound for synthetic sparkline samples
    pub sample_max: f64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            jitter_fraction: 0.001,
            price_floor: 0.01,
            sample_min: 30.0,
            sample_max: 70.0,
        }
    }
}

/// Advance one coin by a single tick.
pub fn tick_coin<R: Rng + ?Sized>(coin: &mut Coin, rng: &mut R, cfg: &TickerConfig) {
    let drift = (rng.random::<f64>() - 0.5) * (coin.price * cfg.jitter_fraction);
    coin.price = (coin.price + drift).max(cfg.price_floor);

    let sample = cfg.sample_min + rng.random::<f64>() * (cfg.sample_max - cfg.sample_min);
    if !coin.sparkline.is_empty() {
        coin.sparkline.remove(0);
        coin.sparkline.push(sample);
    }
}

/// Advance every coin in place.
pub fn tick_in_place<R: Rng + ?Sized>(coins: &mut [Coin], rng: &mut R, cfg: &TickerConfig) {
    for coin in coins.iter_mut() {
        tick_coin(coin, rng, cfg);
    }
}

/// Produce the next generation of the collection, leaving the input untouched.
pub fn tick<R: Rng + ?Sized>(coins: &[Coin], rng: &mut R, cfg: &TickerConfig) -> Vec<Coin> {
    let mut next = coins.to_vec();
    tick_in_place(&mut next, rng, cfg);
    next
}

/// The default [`MarketFeed`]: local random walk, no network.
pub struct SimulatedFeed {
    rng: StdRng,
    config: TickerConfig,
}

impl SimulatedFeed {
    /// Seeded feed (reproducible) or entropy-seeded when `seed` is `None`.
    pub fn new(config: TickerConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, config }
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }
}

impl MarketFeed for SimulatedFeed {
    fn advance(&mut self, coins: &mut [Coin]) {
        tick_in_place(coins, &mut self.rng, &self.config);
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
