//! In-UI debug overlay (toggle with Ctrl+D)

use crate::app::{App, AppState};
use crate::debug::FrameMetrics;
use crate::scene::SceneState;

/// Renderer-side values the overlay shows next to the state snapshot
pub struct DebugSnapshot<'a> {
    pub scene: &'a SceneState,
    pub particle_count: usize,
    pub ticker_running: bool,
    pub elapsed: f32,
    pub frame_metrics: &'a FrameMetrics,
}

impl<'a> DebugSnapshot<'a> {
    pub fn from_app(app: &'a App) -> Self {
        Self {
            scene: &app.scene,
            particle_count: app.particles.len(),
            ticker_running: app.is_ticker_running(),
            elapsed: app.elapsed,
            frame_metrics: &app.frame_metrics,
        }
    }
}

/// Check if the overlay should be drawn this frame
pub fn should_show_overlay(state: &AppState) -> bool {
    state.debug_overlay_visible
}

/// Render debug overlay as an egui window. Returns true when "Save config" was clicked.
pub fn render_debug_overlay(ctx: &egui::Context, state: &AppState, snapshot: &DebugSnapshot<'_>) -> bool {
    let mut save_clicked = false;

    egui::Window::new("Debug Monitor")
        .collapsible(true)
        .resizable(true)
        .default_size([320.0, 460.0])
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("View");
                ui.label(format!("Current: {:?} ({})", state.current_view, state.current_view.title()));
                ui.label(format!("Scroll offset: {:.3}", state.landing.scroll_offset));

                ui.separator();

                ui.heading("Performance");
                let metrics = snapshot.frame_metrics;
                ui.label(format!("Frame: {:.1}ms", metrics.last_frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Avg:   {:.1}ms", metrics.avg_frame_time().as_secs_f64() * 1000.0));
                ui.label(format!("FPS:   {:.1}", metrics.fps()));
                if metrics.slow_frame_count > 0 {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 0, 0),
                        format!("Slow frames: {}", metrics.slow_frame_count),
                    );
                }

                ui.separator();

                ui.heading("Scene");
                let main = &snapshot.scene.main;
                ui.label(format!("Elapsed: {:.1}s", snapshot.elapsed));
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    main.position.x, main.position.y, main.position.z
                ));
                ui.label(format!("Rotation: ({:.2}, {:.2})", main.rotation.x, main.rotation.y));
                ui.label(format!("Scale: {:.3}  Core: {:.3}", main.scale, snapshot.scene.core_scale));
                ui.label(format!("Camera z: {:.2}", snapshot.scene.camera_z));
                ui.label(format!("Particles: {}", snapshot.particle_count));

                ui.separator();

                ui.heading("Market Feed");
                ui.label(format!("Feed: {}", state.feed_name));
                if snapshot.ticker_running {
                    ui.colored_label(egui::Color32::from_rgb(74, 222, 128), "Ticker: running");
                } else {
                    ui.label("Ticker: stopped");
                }
                ui.label(format!("Ticks applied: {}", state.markets.tick_count));
                ui.label(format!("Interval: {}ms", state.config.ticker.interval_ms));
                if let Some(symbol) = &state.markets.selected {
                    ui.label(format!("Overlay bound to: {}", symbol));
                }

                ui.separator();

                ui.heading("Config");
                match state.config.seed {
                    Some(seed) => ui.label(format!("Seed: {}", seed)),
                    None => ui.label("Seed: entropy"),
                };
                if ui.button("Save config").clicked() {
                    save_clicked = true;
                }
            });
        });

    save_clicked
}
