//! # User Terminal Screen
//!
//! Vault balance, held assets, staking positions, recent activity and the
//! security card. All figures are fixed demo records from [`crate::dashboard`].

use egui::{Color32, RichText};

use crate::app::{AppLike, AppState, NotificationLevel, View};
use crate::dashboard::{self, ActivitySign};
use crate::ui::screens::overview::header_text;
use crate::ui::theme::Theme;
use crate::ui::widgets::header::{render_sub_header, section_caption};

/// Colour for an activity value by its sign
pub fn activity_color(sign: ActivitySign, theme: &Theme) -> Color32 {
    match sign {
        ActivitySign::Credit => theme.colors.positive,
        ActivitySign::Debit => theme.colors.negative,
        ActivitySign::Neutral => theme.colors.text,
    }
}

/// Render the user terminal dashboard
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.config.theme);
    let (title, subtitle) = header_text(View::MyPage);
    render_sub_header(ui, &theme, title, subtitle, dashboard::ACCOUNT_BADGE);
    ui.add_space(24.0);

    let mut demo_action: Option<&'static str> = None;

    egui::ScrollArea::vertical()
        .id_salt("mypage_scroll")
        .show(ui, |ui| {
            ui.columns(3, |cols| {
                if let Some(action) = render_vault(&mut cols[0], &theme) {
                    demo_action = Some(action);
                }
                render_staking(&mut cols[1], &theme);
            });
            ui.add_space(16.0);
            ui.columns(3, |cols| {
                render_activity(&mut cols[0], &theme);
                if render_security(&mut cols[1], &theme) {
                    demo_action = Some("Key management");
                }
            });
        });

    if let Some(action) = demo_action {
        tracing::debug!(action, "Demo-only dashboard action");
        app.state()
            .write()
            .notify(NotificationLevel::Info, format!("{} is not available in the demo", action));
    }
}

/// Returns the demo action clicked, if any
fn render_vault(ui: &mut egui::Ui, theme: &Theme) -> Option<&'static str> {
    let mut clicked = None;
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, "Vault Balance");
        ui.label(RichText::new(dashboard::VAULT_BALANCE).size(34.0).strong());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let deposit = egui::Button::new(
                RichText::new("DEPOSIT").strong().color(theme.colors.background),
            )
            .fill(theme.colors.accent);
            if ui.add(deposit).clicked() {
                clicked = Some("Deposit");
            }
            if ui.button(RichText::new("WITHDRAW").strong()).clicked() {
                clicked = Some("Withdraw");
            }
        });

        ui.add_space(16.0);
        section_caption(ui, theme, "Your Assets");
        ui.add_space(6.0);
        egui::Grid::new("assets_grid")
            .num_columns(3)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for asset in &dashboard::ASSETS {
                    ui.label(RichText::new(asset.name).strong());
                    ui.label(RichText::new(asset.amount).monospace().color(theme.colors.muted));
                    ui.label(RichText::new(asset.value).monospace());
                    ui.end_row();
                }
            });
    });
    clicked
}

fn render_staking(ui: &mut egui::Ui, theme: &Theme) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("ACTIVE STAKING POSITIONS").size(12.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("VIEW ALL").size(10.0).color(theme.colors.accent));
            });
        });
        ui.add_space(10.0);
        egui::Grid::new("staking_grid")
            .num_columns(4)
            .spacing([24.0, 10.0])
            .striped(true)
            .show(ui, |ui| {
                for heading in ["Strategy", "APY", "Earnings", "Status"] {
                    section_caption(ui, theme, heading);
                }
                ui.end_row();

                for position in &dashboard::STAKING_POSITIONS {
                    ui.label(RichText::new(position.strategy).strong());
                    ui.label(RichText::new(position.apy).color(theme.colors.accent));
                    ui.label(RichText::new(position.earnings).color(theme.colors.positive));
                    let status_color = if position.status == "Active" {
                        theme.colors.positive
                    } else {
                        theme.colors.muted
                    };
                    ui.label(RichText::new(position.status.to_uppercase()).size(10.0).color(status_color));
                    ui.end_row();
                }
            });
    });
}

fn render_activity(ui: &mut egui::Ui, theme: &Theme) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, "Recent Activity");
        ui.add_space(10.0);
        for entry in &dashboard::ACTIVITY {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(entry.kind).strong());
                    ui.label(RichText::new(entry.when).size(10.0).color(theme.colors.muted));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(entry.value)
                            .monospace()
                            .color(activity_color(entry.sign(), theme)),
                    );
                });
            });
            ui.add_space(6.0);
        }
    });
}

/// True when "Manage Keys" was clicked
fn render_security(ui: &mut egui::Ui, theme: &Theme) -> bool {
    let mut clicked = false;
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, "Neural Security");
        ui.add_space(6.0);
        ui.label(
            RichText::new("🛡 100% Protection Level")
                .strong()
                .color(theme.colors.positive),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(
                "Your account is protected by hardware-grade multi-sig authentication and neural-link behavioral monitoring.",
            )
            .size(12.0)
            .color(theme.colors.muted),
        );
        ui.add_space(12.0);
        clicked = ui
            .add_sized([ui.available_width(), 32.0], egui::Button::new("MANAGE KEYS"))
            .clicked();
    });
    clicked
}
