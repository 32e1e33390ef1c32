//! # Live Update Indicator
//!
//! Visual indicator showing that the ticker is running.

use crate::ui::theme::Theme;

/// Render live update indicator with a caption
pub fn render_live_indicator(ui: &mut egui::Ui, is_live: bool, caption: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        if is_live {
            // Pulsing dot, half-second phases
            let pulse = (ui.input(|i| i.time) * 2.0) as u64 % 2;
            if pulse == 0 {
                ui.colored_label(theme.colors.positive, "●");
            } else {
                ui.colored_label(theme.colors.positive.gamma_multiply(0.4), "●");
            }
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(500));
        } else {
            ui.colored_label(theme.colors.muted, "○");
        }
        ui.label(
            egui::RichText::new(caption)
                .size(10.0)
                .strong()
                .color(theme.colors.muted),
        );
    });
}
