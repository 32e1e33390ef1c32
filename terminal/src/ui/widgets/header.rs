//! Page header shared by the dashboard screens.

use egui::{Align, Layout, RichText};

use crate::ui::theme::Theme;

/// Title, subtitle and the account badge on the right
pub fn render_sub_header(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: &str, account: &str) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title.to_uppercase()).size(30.0).strong());
            ui.label(RichText::new(subtitle).size(13.0).color(theme.colors.muted));
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            theme
                .card_frame()
                .inner_margin(egui::Margin::symmetric(14, 8))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("ACTIVE ACCOUNT")
                                .size(9.0)
                                .color(theme.colors.muted),
                        );
                        ui.label(RichText::new(account).monospace().color(theme.colors.accent));
                    });
                });
        });
    });
}

/// Small upper-case caption above a card body
pub fn section_caption(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(10.0)
            .strong()
            .color(theme.colors.muted),
    );
}
