//! # Navigation Header
//!
//! Fixed header with the brand label, one button per view and the
//! launch / exit toggle.

use egui::{Align, Layout, RichText};

use crate::app::{AppLike, AppState, View};
use crate::ui::theme::Theme;

/// Label of the header toggle for the current view
pub fn launch_toggle_label(view: View) -> &'static str {
    if view == View::Landing {
        "LAUNCH APP"
    } else {
        "EXIT DASHBOARD"
    }
}

/// Render the header row
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.config.theme);
    let current = state.current_view;

    ui.horizontal(|ui| {
        ui.set_height(44.0);

        let brand = ui.add(
            egui::Label::new(
                RichText::new("AETHERIS")
                    .size(24.0)
                    .strong()
                    .color(theme.colors.accent),
            )
            .sense(egui::Sense::click()),
        );
        if brand.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            app.handle_view_change(View::Landing);
        }

        ui.add_space(32.0);

        for &view in View::all() {
            let color = if view == current {
                theme.colors.accent
            } else {
                theme.colors.muted
            };
            let label = RichText::new(view.nav_label().to_uppercase())
                .size(13.0)
                .color(color);
            if ui.add(egui::Button::new(label).frame(false)).clicked() && view != current {
                app.handle_view_change(view);
            }
            ui.add_space(12.0);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let toggle = egui::Button::new(
                RichText::new(launch_toggle_label(current)).size(12.0).strong(),
            )
            .stroke(egui::Stroke::new(1.0, theme.colors.accent.gamma_multiply(0.3)))
            .corner_radius(egui::CornerRadius::same(16));

            if ui.add(toggle).clicked() {
                app.handle_launch_toggle();
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_follows_view() {
        assert_eq!(launch_toggle_label(View::Landing), "LAUNCH APP");
        assert_eq!(launch_toggle_label(View::Overview), "EXIT DASHBOARD");
        assert_eq!(launch_toggle_label(View::Markets), "EXIT DASHBOARD");
        assert_eq!(launch_toggle_label(View::MyPage), "EXIT DASHBOARD");
    }
}
