//! # Screen Modules
//!
//! One module per top-level view:
//!
//! - **[`landing`]**: scroll-driven marketing page over the animated scene
//! - **[`overview`]**: Network Overview dashboard
//! - **[`mypage`]**: User Terminal dashboard
//! - **[`markets`]**: live ticker table and the coin detail overlay
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // - Read from the cloned state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens never hold the state lock while drawing; actions go through
//! [`crate::app::AppLike`], which takes the lock internally.
//!
//! [`active_screen`] is the only place a view is mapped to a screen, so
//! exactly one screen is drawn per frame.

pub mod landing;
pub mod markets;
pub mod mypage;
pub mod overview;

use crate::app::{AppLike, AppState, View};

/// The screen drawn for a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Landing,
    Overview,
    MyPage,
    Markets,
}

impl ActiveScreen {
    /// Dashboards and markets share the header exit button and the
    /// constrained content column
    pub fn is_app_screen(&self) -> bool {
        !matches!(self, ActiveScreen::Landing)
    }
}

/// Map the current view to the single screen that renders it
pub fn active_screen(view: View) -> ActiveScreen {
    match view {
        View::Landing => ActiveScreen::Landing,
        View::Overview => ActiveScreen::Overview,
        View::MyPage => ActiveScreen::MyPage,
        View::Markets => ActiveScreen::Markets,
    }
}

/// Draw the screen for `state.current_view`
pub fn render_active(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) -> ActiveScreen {
    let screen = active_screen(state.current_view);
    match screen {
        ActiveScreen::Landing => landing::render(ui, state, app),
        ActiveScreen::Overview => overview::render(ui, state, app),
        ActiveScreen::MyPage => mypage::render(ui, state, app),
        ActiveScreen::Markets => markets::render(ui, state, app),
    }
    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ActiveScreen; 4] = [
        ActiveScreen::Landing,
        ActiveScreen::Overview,
        ActiveScreen::MyPage,
        ActiveScreen::Markets,
    ];

    #[test]
    fn test_exactly_one_screen_per_view() {
        for &view in View::all() {
            let active = active_screen(view);
            let shown = ALL.iter().filter(|&&s| s == active).count();
            let hidden = ALL.iter().filter(|&&s| s != active).count();
            assert_eq!(shown, 1, "{:?}", view);
            assert_eq!(hidden, 3, "{:?}", view);
        }
    }

    #[test]
    fn test_views_map_to_distinct_screens() {
        let screens: Vec<ActiveScreen> = View::all().iter().map(|&v| active_screen(v)).collect();
        for s in ALL {
            assert_eq!(screens.iter().filter(|&&x| x == s).count(), 1, "{:?}", s);
        }
        assert!(!active_screen(View::Landing).is_app_screen());
        assert!(active_screen(View::Markets).is_app_screen());
    }

    #[test]
    fn test_navigation_scenario_screens() {
        use crate::app::App;
        use crate::core::AppConfig;

        let config = AppConfig {
            seed: Some(5),
            ..AppConfig::default()
        };
        let mut app = App::with_config(config);
        let current = |app: &App| active_screen(app.state.read().current_view);

        assert_eq!(current(&app), ActiveScreen::Landing);
        app.handle_launch();
        assert_eq!(current(&app), ActiveScreen::Overview);
        app.handle_view_change(View::Markets);
        assert_eq!(current(&app), ActiveScreen::Markets);
        app.handle_view_change(View::MyPage);
        assert_eq!(current(&app), ActiveScreen::MyPage);
        app.handle_launch_toggle();
        assert_eq!(current(&app), ActiveScreen::Landing);
    }
}
