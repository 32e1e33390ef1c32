//! # Settings Handlers
//!
//! Debug overlay toggle and configuration persistence.

use crate::app::state::{AppState, NotificationLevel};
use crate::core::config;
use crate::debug::DebugConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle Ctrl+D
pub(crate) fn handle_toggle_debug_overlay(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.debug_overlay_visible = !state.debug_overlay_visible;
    tracing::debug!(visible = state.debug_overlay_visible, "Toggled debug overlay");
}

/// Startup overlay visibility comes from `AETHERIS_DEBUG_UI` or the `debug-mode` feature
pub(crate) fn apply_debug_config(state: Arc<RwLock<AppState>>, debug: &DebugConfig) {
    state.write().debug_overlay_visible = debug.show_debug_ui;
}

/// Handle settings save
pub(crate) fn handle_settings_save(state: Arc<RwLock<AppState>>) {
    let config = state.read().config.clone();

    match config::save_config(&config) {
        Ok(()) => {
            state
                .write()
                .notify(NotificationLevel::Success, "Settings saved");
        }
        Err(e) => {
            tracing::error!("Failed to save settings: {}", e);
            state
                .write()
                .notify(NotificationLevel::Error, format!("Failed to save settings: {}", e));
        }
    }
}
