//! # External Chart Embed
//!
//! Configuration handed to the third-party advanced-chart widget for a coin.
//! The application owns nothing beyond the symbol it passes in; the rest is a
//! fixed dark-theme preset.

use serde::Serialize;

use crate::core::error::{AppError, Result};

const CHART_BASE_URL: &str = "https://www.tradingview.com/chart/";
const SUPPORT_HOST: &str = "https://www.tradingview.com";

/// Widget configuration. Field names match the keys the widget script reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEmbed {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub enable_publishing: bool,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "gridColor")]
    pub grid_color: String,
    pub hide_top_toolbar: bool,
    pub hide_legend: bool,
    pub save_image: bool,
    pub calendar: bool,
    pub hide_volume: bool,
    pub support_host: String,
}

impl ChartEmbed {
    /// Daily dark chart for `{symbol}USDT` on Binance.
    pub fn for_symbol(symbol: &str) -> Self {
        Self {
            autosize: true,
            symbol: exchange_symbol(symbol),
            interval: "D".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            enable_publishing: false,
            background_color: "rgba(5, 5, 5, 1)".to_string(),
            grid_color: "rgba(255, 255, 255, 0.05)".to_string(),
            hide_top_toolbar: false,
            hide_legend: false,
            save_image: false,
            calendar: false,
            hide_volume: false,
            support_host: SUPPORT_HOST.to_string(),
        }
    }

    /// JSON payload as the widget script expects it.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AppError::ChartWidget(e.to_string()))
    }

    /// Public chart page for this symbol and interval.
    pub fn url(&self) -> String {
        format!(
            "{}?symbol={}&interval={}&theme={}",
            CHART_BASE_URL,
            self.symbol.replace(':', "%3A"),
            self.interval,
            self.theme
        )
    }

    /// Hand the chart off to the system browser.
    pub fn open_external(&self) -> Result<()> {
        let url = self.url();
        tracing::info!(symbol = %self.symbol, url = %url, "Opening external chart");
        open::that(&url).map_err(|e| AppError::ChartWidget(format!("{}: {}", url, e)))
    }
}

/// `BTC` -> `BINANCE:BTCUSDT`
pub fn exchange_symbol(symbol: &str) -> String {
    format!("BINANCE:{}USDT", symbol.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_symbol() {
        assert_eq!(exchange_symbol("BTC"), "BINANCE:BTCUSDT");
        assert_eq!(exchange_symbol(" sol "), "BINANCE:SOLUSDT");
    }

    #[test]
    fn test_embed_json_carries_symbol_and_preset() {
        let embed = ChartEmbed::for_symbol("ETH");
        let json = embed.to_json().expect("embed should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["symbol"], "BINANCE:ETHUSDT");
        assert_eq!(value["interval"], "D");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["timezone"], "Etc/UTC");
        assert_eq!(value["backgroundColor"], "rgba(5, 5, 5, 1)");
        assert_eq!(value["hide_volume"], false);
    }

    #[test]
    fn test_url_encodes_exchange_prefix() {
        let url = ChartEmbed::for_symbol("LINK").url();
        assert!(url.starts_with(CHART_BASE_URL));
        assert!(url.contains("symbol=BINANCE%3ALINKUSDT"));
        assert!(url.contains("interval=D"));
    }
}
