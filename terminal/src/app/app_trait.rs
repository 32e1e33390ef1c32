//! # App Trait
//!
//! The surface screen renderers program against: a state accessor plus the
//! action callbacks. [`crate::app::App`] is the production implementation.

use std::sync::Arc;
use parking_lot::RwLock;
use crate::app::{AppState, View};

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Navigation methods
    fn handle_view_change(&mut self, view: View);
    fn handle_launch_toggle(&mut self);
    fn handle_launch(&mut self);
    fn next_view(&mut self);
    fn previous_view(&mut self);

    // Landing
    fn handle_scroll(&mut self, offset: f32);

    // Markets methods
    fn handle_coin_select(&mut self, symbol: &str);
    fn handle_coin_close(&mut self);
    fn handle_search_change(&mut self, query: String);
    fn handle_open_chart(&mut self, symbol: &str);

    // Settings methods
    fn toggle_debug_overlay(&mut self);
    fn handle_settings_save(&mut self);
}
