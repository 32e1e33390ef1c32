//! # GUI Rendering Framework
//!
//! Orchestrates one frame of the UI: keyboard shortcuts, the animated scene
//! on the background layer, the header, the active screen and the overlays.
//!
//! The scene is painted on [`egui::LayerId::background`] across the whole
//! window; panels above it are transparent so the core stays visible behind
//! every screen.

pub mod debug_overlay;
pub mod scene_view;
pub mod screens;
pub mod theme;
pub mod widgets;

use egui::{Key, Modifiers};

use crate::app::App;
use scene_view::SceneView;
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Area the scene is projected into: the full window
pub fn scene_rect(ctx: &egui::Context) -> egui::Rect {
    ctx.content_rect()
}

/// Main render function - called every frame by eframe
pub fn render(
    ctx: &egui::Context,
    app: &mut App,
    notifications: &mut NotificationManager,
    scene_view: &SceneView,
) {
    handle_shortcuts(ctx, app);

    // Read state for rendering
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => {
            // Lock is held elsewhere, skip this frame
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    let theme = Theme::from_config(&state.config.theme);

    let painter = ctx.layer_painter(egui::LayerId::background());
    scene_view.paint(
        &painter,
        scene_rect(ctx),
        &app.scene,
        &app.particles.instances(),
        app.elapsed,
        &theme.colors,
    );

    egui::TopBottomPanel::top("aetheris_header")
        .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(24, 12)))
        .show_separator_line(false)
        .show(ctx, |ui| {
            widgets::nav_bar::render_nav_bar(ui, &state, app);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(24, 8)))
        .show(ctx, |ui| {
            let screen = screens::active_screen(state.current_view);
            if screen.is_app_screen() {
                // Keep dashboards readable on very wide windows
                ui.set_max_width(ui.available_width().min(1280.0));
            }
            screens::render_active(ui, &state, app);
        });

    if debug_overlay::should_show_overlay(&state) {
        let snapshot = debug_overlay::DebugSnapshot::from_app(app);
        if debug_overlay::render_debug_overlay(ctx, &state, &snapshot) {
            app.handle_settings_save();
        }
    }

    notifications.drain(&app.state);
}

fn handle_shortcuts(ctx: &egui::Context, app: &mut App) {
    // Text fields keep Tab for focus movement
    if !ctx.wants_keyboard_input() {
        if ctx.input_mut(|i| i.consume_key(Modifiers::SHIFT, Key::Tab)) {
            app.previous_view();
        } else if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Tab)) {
            app.next_view();
        }
    }

    if ctx.input_mut(|i| i.consume_key(Modifiers::CTRL, Key::D)) {
        app.toggle_debug_overlay();
    }

    if ctx.input(|i| i.key_pressed(Key::Escape)) && app.state.read().markets.selected.is_some() {
        app.handle_coin_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_rect_covers_window() {
        let ctx = egui::Context::default();
        let window = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1440.0, 900.0));
        let input = egui::RawInput {
            screen_rect: Some(window),
            ..Default::default()
        };

        let mut rect = None;
        let _ = ctx.run(input, |ctx| rect = Some(scene_rect(ctx)));
        assert_eq!(rect, Some(window));
    }
}
