//! # Coin Records
//!
//! The in-memory coin collection shown on the markets screen, regenerated from a
//! hard-coded seed list every time the application starts.

/// Number of samples in every sparkline window.
pub const SPARKLINE_LEN: usize = 10;

/// A single market row.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Current price in USD
    pub price: f64,
    /// 24h change in percent
    pub change: f64,
    pub high: f64,
    pub low: f64,
    /// Pre-formatted 24h volume, e.g. "42.1B"
    pub volume: String,
    /// Pre-formatted market cap, e.g. "1.8T"
    pub market_cap: String,
    /// Rolling window of normalized samples (0..=100), oldest first
    pub sparkline: Vec<f64>,
}

impl Coin {
    #[allow(clippy::too_many_arguments)]
    fn seed(
        id: &str,
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        high: f64,
        low: f64,
        volume: &str,
        market_cap: &str,
        sparkline: [f64; SPARKLINE_LEN],
    ) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            high,
            low,
            volume: volume.to_string(),
            market_cap: market_cap.to_string(),
            sparkline: sparkline.to_vec(),
        }
    }

    /// True when the 24h change is zero or positive
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Trading pair label shown under the coin name
    pub fn pair(&self) -> String {
        format!("{} / USDT", self.symbol)
    }
}

/// Build the seed collection.
pub fn initial_coins() -> Vec<Coin> {
    vec![
        Coin::seed("1", "BTC", "Bitcoin", 94281.42, 2.4, 96102.00, 92400.00, "42.1B", "1.8T",
            [40.0, 50.0, 45.0, 60.0, 55.0, 70.0, 65.0, 80.0, 75.0, 90.0]),
        Coin::seed("2", "ETH", "Ethereum", 2841.12, -1.2, 2950.00, 2810.00, "18.4B", "341B",
            [70.0, 65.0, 60.0, 55.0, 50.0, 45.0, 40.0, 35.0, 30.0, 25.0]),
        Coin::seed("3", "SOL", "Solana", 142.08, 8.4, 145.00, 130.00, "6.2B", "62B",
            [20.0, 30.0, 25.0, 40.0, 35.0, 50.0, 45.0, 60.0, 55.0, 70.0]),
        Coin::seed("4", "BNB", "BNB", 612.45, 0.5, 620.00, 605.00, "1.2B", "94B",
            [50.0, 52.0, 51.0, 53.0, 52.0, 54.0, 53.0, 55.0, 54.0, 56.0]),
        Coin::seed("5", "ADA", "Cardano", 0.42, -2.1, 0.45, 0.41, "482M", "15B",
            [60.0, 58.0, 56.0, 54.0, 52.0, 50.0, 48.0, 46.0, 44.0, 42.0]),
        Coin::seed("6", "DOT", "Polkadot", 7.12, 1.8, 7.30, 6.90, "210M", "10B",
            [30.0, 32.0, 31.0, 33.0, 32.0, 35.0, 34.0, 38.0, 37.0, 40.0]),
        Coin::seed("7", "LINK", "Chainlink", 18.24, 3.2, 18.50, 17.10, "512M", "11B",
            [40.0, 45.0, 42.0, 48.0, 45.0, 52.0, 50.0, 58.0, 55.0, 62.0]),
    ]
}

/// Case-insensitive substring match on name or symbol. An empty term matches everything.
pub fn filter_coins<'a>(coins: &'a [Coin], term: &str) -> Vec<&'a Coin> {
    let needle = term.trim().to_lowercase();
    coins
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Map sparkline samples into a 100x100 box (x grows right, y grows down).
///
/// Sample `i` of `n` lands at `(i / (n - 1) * 100, 100 - value)`. A single sample
/// sits at x = 0.
pub fn sparkline_points(samples: &[f64]) -> Vec<[f64; 2]> {
    let span = samples.len().saturating_sub(1).max(1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64 / span * 100.0, 100.0 - v])
        .collect()
}

/// Format a USD price with thousands separators and two decimals, e.g. `$94,281.42`.
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_is_complete() {
        let coins = initial_coins();
        assert_eq!(coins.len(), 7);
        let symbols: Vec<_> = coins.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["BTC", "ETH", "SOL", "BNB", "ADA", "DOT", "LINK"]);
        assert!(coins.iter().all(|c| c.sparkline.len() == SPARKLINE_LEN));
        assert!(coins.iter().all(|c| c.price > 0.0));
    }

    #[test]
    fn test_filter_matches_name_or_symbol_case_insensitive() {
        let coins = initial_coins();
        let by_symbol = filter_coins(&coins, "eth");
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol, "ETH");

        let by_name = filter_coins(&coins, "CHAIN");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol, "LINK");

        // "so" hits Solana only; "o" hits many
        assert_eq!(filter_coins(&coins, "so").len(), 1);
        assert!(filter_coins(&coins, "o").len() > 1);
    }

    #[test]
    fn test_filter_empty_term_returns_all() {
        let coins = initial_coins();
        assert_eq!(filter_coins(&coins, "").len(), coins.len());
        assert_eq!(filter_coins(&coins, "   ").len(), coins.len());
        assert!(filter_coins(&coins, "doge").is_empty());
    }

    #[test]
    fn test_sparkline_points_span_box() {
        let pts = sparkline_points(&[40.0, 50.0, 90.0]);
        assert_eq!(pts, vec![[0.0, 60.0], [50.0, 50.0], [100.0, 10.0]]);
        assert_eq!(sparkline_points(&[25.0]), vec![[0.0, 75.0]]);
        assert!(sparkline_points(&[]).is_empty());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(94281.42), "$94,281.42");
        assert_eq!(format_usd(0.42), "$0.42");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(612.449), "$612.45");
        assert_eq!(format_usd(-12.5), "-$12.50");
    }

    #[test]
    fn test_direction_and_pair() {
        let coins = initial_coins();
        assert!(coins[0].is_up());
        assert!(!coins[1].is_up());
        assert_eq!(coins[2].pair(), "SOL / USDT");
    }
}
