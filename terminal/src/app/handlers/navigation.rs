//! # Navigation Handlers
//!
//! View changes. All transitions are legal; the handlers only report what
//! changed so the caller can start or stop view-scoped work.

use crate::app::state::{AppState, MarketsState, View};
use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Result of a navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransition {
    pub from: View,
    pub to: View,
}

impl ViewTransition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    pub fn left(&self, view: View) -> bool {
        self.changed() && self.from == view
    }

    pub fn entered(&self, view: View) -> bool {
        self.changed() && self.to == view
    }
}

/// Set the view. Leaving the markets view discards its coins, overlay and search.
///
/// Internal handler function - use [`crate::app::App::handle_view_change`] instead.
pub(crate) fn handle_view_change(state: Arc<RwLock<AppState>>, view: View) -> ViewTransition {
    let mut state = state.write();
    set_view(&mut state, view)
}

/// Header "LAUNCH APP" / "EXIT DASHBOARD" toggle
pub(crate) fn handle_launch_toggle(state: Arc<RwLock<AppState>>) -> ViewTransition {
    let mut state = state.write();
    let target = if state.current_view == View::Landing {
        View::Overview
    } else {
        View::Landing
    };
    set_view(&mut state, target)
}

/// Landing page call-to-action buttons always enter the overview
pub(crate) fn handle_launch(state: Arc<RwLock<AppState>>) -> ViewTransition {
    handle_view_change(state, View::Overview)
}

/// Navigate to next view in Tab order
pub(crate) fn next_view(state: Arc<RwLock<AppState>>) -> Result<ViewTransition> {
    cycle(state, 1)
}

/// Navigate to previous view in Tab order
pub(crate) fn previous_view(state: Arc<RwLock<AppState>>) -> Result<ViewTransition> {
    cycle(state, View::all().len() - 1)
}

fn cycle(state: Arc<RwLock<AppState>>, step: usize) -> Result<ViewTransition> {
    let mut state = state
        .try_write()
        .ok_or_else(|| AppError::State("view navigation skipped, state locked".to_string()))?;

    let views = View::all();
    let current_idx = views
        .iter()
        .position(|&v| v == state.current_view)
        .unwrap_or(0);
    let target = views[(current_idx + step) % views.len()];
    Ok(set_view(&mut state, target))
}

fn set_view(state: &mut AppState, view: View) -> ViewTransition {
    let transition = ViewTransition {
        from: state.current_view,
        to: view,
    };

    if transition.left(View::Markets) {
        // Prices restart from the seeded list on the next visit
        state.markets = MarketsState::default();
    }
    state.current_view = view;

    if transition.changed() {
        tracing::info!(from = ?transition.from, to = ?transition.to, "View changed");
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(view: View) -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.current_view = view;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_launch_toggle() {
        let state = shared(View::Landing);
        assert_eq!(handle_launch_toggle(state.clone()).to, View::Overview);
        assert_eq!(handle_launch_toggle(state.clone()).to, View::Landing);

        for view in [View::MyPage, View::Markets] {
            let state = shared(view);
            assert_eq!(handle_launch_toggle(state).to, View::Landing);
        }
    }

    #[test]
    fn test_launch_always_enters_overview() {
        for &view in View::all() {
            let state = shared(view);
            let t = handle_launch(state.clone());
            assert_eq!(t.to, View::Overview);
            assert_eq!(state.read().current_view, View::Overview);
        }
    }

    #[test]
    fn test_leaving_markets_clears_overlay_and_search() {
        let state = shared(View::Markets);
        {
            let mut s = state.write();
            s.markets.selected = Some("BTC".to_string());
            s.markets.search = "bit".to_string();
        }

        let t = handle_view_change(state.clone(), View::MyPage);
        assert!(t.left(View::Markets));

        let s = state.read();
        assert!(s.markets.selected.is_none());
        assert!(s.markets.search.is_empty());
    }

    #[test]
    fn test_leaving_markets_restores_initial_coins() {
        let state = shared(View::Markets);
        {
            let mut s = state.write();
            s.markets.coins[0].price = 1.0;
            s.markets.tick_count = 5;
            s.markets.last_tick = Some(chrono::Local::now());
        }

        handle_view_change(state.clone(), View::Overview);

        let s = state.read();
        assert_eq!(s.markets.coins, crate::market::initial_coins());
        assert_eq!(s.markets.tick_count, 0);
        assert!(s.markets.last_tick.is_none());
    }

    #[test]
    fn test_reselecting_same_view_is_not_a_change() {
        let state = shared(View::Markets);
        state.write().markets.selected = Some("SOL".to_string());

        let t = handle_view_change(state.clone(), View::Markets);
        assert!(!t.changed());
        assert!(!t.left(View::Markets));
        assert_eq!(state.read().markets.selected.as_deref(), Some("SOL"));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let state = shared(View::MyPage);
        assert_eq!(next_view(state.clone()).ok().map(|t| t.to), Some(View::Landing));
        assert_eq!(previous_view(state.clone()).ok().map(|t| t.to), Some(View::MyPage));
        assert_eq!(previous_view(state.clone()).ok().map(|t| t.to), Some(View::Markets));
    }

    #[test]
    fn test_cycle_skips_when_locked() {
        let state = shared(View::Landing);
        let _guard = state.read();
        assert!(matches!(next_view(state.clone()), Err(AppError::State(_))));
    }
}
