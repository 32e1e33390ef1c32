//! # Application State Types
//!
//! The single view value plus the per-screen state each view needs.

use chrono::{DateTime, Local};

use crate::core::config::AppConfig;
use crate::market::{filter_coins, initial_coins, Coin};

/// Top-level UI mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Scroll-driven marketing page
    Landing,
    /// Network Overview dashboard
    Overview,
    /// User Terminal dashboard
    MyPage,
    /// Live markets table
    Markets,
}

impl View {
    /// All views in header (and Tab) order
    pub fn all() -> &'static [View] {
        &[View::Landing, View::Overview, View::Markets, View::MyPage]
    }

    /// Title for the window and debug overlay
    pub fn title(&self) -> &'static str {
        match self {
            View::Landing => "Vision",
            View::Overview => "Network Overview",
            View::MyPage => "User Terminal",
            View::Markets => "Markets",
        }
    }

    /// Header button label
    pub fn nav_label(&self) -> &'static str {
        match self {
            View::Landing => "Vision",
            View::Overview => "Overview",
            View::MyPage => "My Page",
            View::Markets => "Markets",
        }
    }

    /// Overview and My Page share the dashboard layout
    pub fn is_dashboard(&self) -> bool {
        matches!(self, View::Overview | View::MyPage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Markets screen state
#[derive(Debug, Clone)]
pub struct MarketsState {
    pub coins: Vec<Coin>,
    /// Symbol bound to the detail overlay, if open
    pub selected: Option<String>,
    pub search: String,
    /// Wall-clock time of the last applied tick
    pub last_tick: Option<DateTime<Local>>,
    pub tick_count: u64,
}

impl Default for MarketsState {
    fn default() -> Self {
        Self {
            coins: initial_coins(),
            selected: None,
            search: String::new(),
            last_tick: None,
            tick_count: 0,
        }
    }
}

impl MarketsState {
    /// Live record for the open overlay. Looked up by symbol so the overlay
    /// always shows the latest ticked price.
    pub fn selected_coin(&self) -> Option<&Coin> {
        let symbol = self.selected.as_deref()?;
        self.coins.iter().find(|c| c.symbol == symbol)
    }

    pub fn visible_coins(&self) -> Vec<&Coin> {
        filter_coins(&self.coins, &self.search)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandingState {
    /// Normalized scroll progress in `[0, 1]`
    pub scroll_offset: f32,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Revenue bar heights, regenerated when the overview is entered
    pub revenue: Vec<f64>,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub markets: MarketsState,
    pub landing: LandingState,
    pub dashboard: DashboardState,
    pub config: AppConfig,
    /// Name of the active market feed
    pub feed_name: &'static str,
    pub debug_overlay_visible: bool,
    /// Toasts queued by handlers, drained by the UI each frame
    pub pending_notifications: Vec<(NotificationLevel, String)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            current_view: View::Landing,
            markets: MarketsState::default(),
            landing: LandingState::default(),
            dashboard: DashboardState::default(),
            config,
            feed_name: "simulated",
            debug_overlay_visible: false,
            pending_notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_all_in_header_order() {
        assert_eq!(
            View::all(),
            &[View::Landing, View::Overview, View::Markets, View::MyPage]
        );
    }

    #[test]
    fn test_nav_labels() {
        assert_eq!(View::Landing.nav_label(), "Vision");
        assert_eq!(View::Overview.nav_label(), "Overview");
        assert_eq!(View::Markets.nav_label(), "Markets");
        assert_eq!(View::MyPage.nav_label(), "My Page");
    }

    #[test]
    fn test_dashboard_views() {
        assert!(View::Overview.is_dashboard());
        assert!(View::MyPage.is_dashboard());
        assert!(!View::Landing.is_dashboard());
        assert!(!View::Markets.is_dashboard());
    }

    #[test]
    fn test_selected_coin_tracks_live_record() {
        let mut markets = MarketsState::default();
        markets.selected = Some("ETH".to_string());
        markets.coins[1].price = 1.0;
        assert_eq!(markets.selected_coin().map(|c| c.price), Some(1.0));

        markets.selected = Some("NOPE".to_string());
        assert!(markets.selected_coin().is_none());
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Landing);
        assert_eq!(state.markets.coins.len(), 7);
        assert!(state.markets.selected.is_none());
        assert!(state.pending_notifications.is_empty());
    }
}
