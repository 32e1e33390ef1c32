//! # Stat Card
//!
//! Headline figure with a signed change, used by the overview dashboard and
//! the landing stats strip.

use egui::RichText;

use crate::dashboard::StatCard;
use crate::ui::theme::Theme;
use crate::ui::widgets::header::section_caption;

/// Render a dashboard stat card inside a card frame
pub fn render_stat_card(ui: &mut egui::Ui, theme: &Theme, card: &StatCard) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, card.title);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(card.value).size(26.0).strong());
            let color = if card.positive {
                theme.colors.positive
            } else {
                theme.colors.negative
            };
            ui.label(RichText::new(card.change).size(12.0).strong().color(color));
        });
    });
}

/// Large centred value over a caption
pub fn render_figure(ui: &mut egui::Ui, theme: &Theme, value: &str, label: &str) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new(value)
                    .size(34.0)
                    .strong()
                    .color(theme.colors.accent),
            );
            section_caption(ui, theme, label);
            ui.add_space(12.0);
        });
    });
}
