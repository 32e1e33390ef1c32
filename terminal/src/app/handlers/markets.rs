//! # Markets Handlers
//!
//! Detail overlay binding and table search.

use crate::app::state::{AppState, View};
use parking_lot::RwLock;
use std::sync::Arc;

/// Bind the detail overlay to `symbol`, replacing any previous binding.
///
/// Returns `false` (and leaves state untouched) for unknown symbols or when the
/// markets view is not active.
pub(crate) fn handle_coin_select(state: Arc<RwLock<AppState>>, symbol: &str) -> bool {
    let mut state = state.write();

    if state.current_view != View::Markets {
        tracing::warn!(symbol, view = ?state.current_view, "Ignoring coin select outside markets");
        return false;
    }
    if !state.markets.coins.iter().any(|c| c.symbol == symbol) {
        tracing::warn!(symbol, "Ignoring select of unknown coin");
        return false;
    }

    tracing::info!(symbol, "Opening coin detail");
    state.markets.selected = Some(symbol.to_string());
    true
}

pub(crate) fn handle_coin_close(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Some(symbol) = state.markets.selected.take() {
        tracing::info!(symbol = %symbol, "Closing coin detail");
    }
}

pub(crate) fn handle_search_change(state: Arc<RwLock<AppState>>, query: String) {
    let mut state = state.write();
    state.markets.search = query;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markets_state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.current_view = View::Markets;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_select_binds_exactly_one_symbol() {
        let state = markets_state();
        assert!(handle_coin_select(state.clone(), "BTC"));
        assert!(handle_coin_select(state.clone(), "SOL"));
        assert_eq!(state.read().markets.selected.as_deref(), Some("SOL"));
    }

    #[test]
    fn test_close_clears_binding() {
        let state = markets_state();
        handle_coin_select(state.clone(), "ETH");
        handle_coin_close(state.clone());
        assert!(state.read().markets.selected.is_none());
        assert_eq!(state.read().current_view, View::Markets);
    }

    #[test]
    fn test_unknown_symbol_is_ignored() {
        let state = markets_state();
        handle_coin_select(state.clone(), "ADA");
        assert!(!handle_coin_select(state.clone(), "DOGE"));
        assert_eq!(state.read().markets.selected.as_deref(), Some("ADA"));
    }

    #[test]
    fn test_select_outside_markets_is_ignored() {
        let state = Arc::new(RwLock::new(AppState::default()));
        assert!(!handle_coin_select(state.clone(), "BTC"));
        assert!(state.read().markets.selected.is_none());
    }

    #[test]
    fn test_search_updates_visible_coins() {
        let state = markets_state();
        handle_search_change(state.clone(), "sol".to_string());
        let s = state.read();
        let visible = s.markets.visible_coins();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].symbol, "SOL");
    }
}
