//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Handlers queue messages on
//! [`AppState`]; the UI moves them into toasts once per frame.

use std::sync::Arc;

use egui_notify::Toasts;
use parking_lot::RwLock;

use crate::app::{AppState, NotificationLevel};

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Info => self.info(message),
            NotificationLevel::Success => self.success(message),
            NotificationLevel::Warning => self.warning(message),
            NotificationLevel::Error => self.error(message),
        }
    }

    /// Move queued notifications out of the shared state into toasts.
    ///
    /// Returns how many were moved. Skips the frame if the lock is busy.
    pub fn drain(&mut self, state: &Arc<RwLock<AppState>>) -> usize {
        let pending = match state.try_write() {
            Some(mut guard) => std::mem::take(&mut guard.pending_notifications),
            None => return 0,
        };
        let count = pending.len();
        for (level, message) in pending {
            self.push(level, message);
        }
        count
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
