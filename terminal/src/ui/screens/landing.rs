//! # Landing Screen
//!
//! Ten full-height sections over the animated backdrop. The scroll progress
//! of the page feeds the scene animator, so scrolling spins and zooms the core.

use egui::{Align, Layout, RichText, ScrollArea};

use crate::app::{AppLike, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::header::section_caption;
use crate::ui::widgets::stat_card::render_figure;

/// Number of full-height sections on the page
pub const SECTION_COUNT: usize = 10;

/// Scroll movement below this is not reported
const SCROLL_EPSILON: f32 = 1e-4;

const CAPABILITIES: [(&str, &str); 3] = [
    ("Vault Architecture", "Multi-sig atomic security protocols ensuring asset integrity at every layer."),
    ("Neural Liquidity", "AI-driven market making that predicts volatility before it happens."),
    ("Cross-Chain Sync", "Seamless interoperability between L1s, L2s and legacy systems."),
];

const STATS: [(&str, &str); 4] = [
    ("$12.4B+", "Assets Secured"),
    ("48,201", "Active Nodes"),
    ("<$0.01", "Avg. TxFee"),
    ("99.999%", "Uptime"),
];

const PATH: [(&str, &str, &str); 3] = [
    ("01", "Integration", "Connect your infrastructure to the Aetheris Mesh API."),
    ("02", "Allocation", "Deploy capital across automated neutral strategy vaults."),
    ("03", "Optimization", "Neural engines continuously rebalance for maximum efficiency."),
];

const TESTIMONIALS: [(&str, &str, &str); 2] = [
    (
        "Alex Rivers",
        "CTO, NeonVentures",
        "The first protocol that actually delivers on the promise of sub-millisecond settlement without sacrificing security.",
    ),
    (
        "Sarah Chen",
        "Lead Dev, LiquidGrid",
        "Integrating with Aetheris was the single best decision for our scalability roadmap this year.",
    ),
];

const BOOT_LOG: [&str; 4] = [
    "> initializing aetheris_core...",
    "> syncing neural_mesh_network...",
    "> optimization_sequence: [OK]",
    "> current_throughput: 2.4M tps",
];

/// Normalized scroll progress: `offset / max_offset`, clamped to `[0, 1]`.
/// A page that does not scroll reports zero.
pub fn scroll_progress(offset: f32, max_offset: f32) -> f32 {
    if max_offset <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0)
}

/// Render the landing page
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.config.theme);
    let section_height = ui.available_height().max(320.0);
    let mut launch = false;

    let output = ScrollArea::vertical()
        .id_salt("landing_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let sections: [fn(&mut egui::Ui, &Theme, &mut bool); SECTION_COUNT] = [
                hero,
                speed,
                capabilities,
                showcase,
                stats,
                ecosystem_path,
                perpetual_motion,
                testimonials,
                call_to_action,
                footer,
            ];
            for section in sections {
                ui.allocate_ui_with_layout(
                    egui::vec2(ui.available_width(), section_height),
                    Layout::top_down(Align::Center).with_main_justify(true),
                    |ui| {
                        ui.set_min_height(section_height);
                        section(ui, &theme, &mut launch);
                    },
                );
            }
        });

    let max_offset = output.content_size.y - output.inner_rect.height();
    let progress = scroll_progress(output.state.offset.y, max_offset);
    if (progress - state.landing.scroll_offset).abs() > SCROLL_EPSILON {
        app.handle_scroll(progress);
    }

    if launch {
        app.handle_launch();
    }
}

fn headline(ui: &mut egui::Ui, theme: &Theme, first: &str, accent: &str, size: f32) {
    ui.label(RichText::new(first).size(size).strong());
    ui.label(RichText::new(accent).size(size).strong().color(theme.colors.accent));
}

fn body(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(RichText::new(text).size(16.0).color(theme.colors.muted));
}

fn primary_button(ui: &mut egui::Ui, theme: &Theme, text: &str) -> bool {
    let button = egui::Button::new(
        RichText::new(text)
            .size(15.0)
            .strong()
            .color(theme.colors.background),
    )
    .fill(theme.colors.accent)
    .corner_radius(egui::CornerRadius::same(24))
    .min_size(egui::vec2(200.0, 44.0));
    ui.add(button).clicked()
}

fn secondary_button(ui: &mut egui::Ui, text: &str) -> bool {
    let button = egui::Button::new(RichText::new(text).size(15.0).strong())
        .corner_radius(egui::CornerRadius::same(24))
        .min_size(egui::vec2(200.0, 44.0));
    ui.add(button).clicked()
}

fn hero(ui: &mut egui::Ui, theme: &Theme, launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.label(
            RichText::new("VERSION 4.0 PROTOCOL IS LIVE")
                .size(10.0)
                .strong()
                .color(theme.colors.accent),
        );
        ui.add_space(20.0);
        headline(ui, theme, "DECENTRALIZE", "THE FUTURE.", 72.0);
        ui.add_space(24.0);
        body(
            ui,
            theme,
            "The first neural-integrated liquidity protocol built for the high-performance autonomous economy.",
        );
        ui.add_space(32.0);
        ui.horizontal(|ui| {
            if primary_button(ui, theme, "LAUNCH TERMINAL  →") {
                *launch = true;
            }
            // Whitepaper is not linked anywhere yet
            secondary_button(ui, "VIEW WHITEPAPER");
        });
        ui.add_space(60.0);
        ui.label(RichText::new("SCROLL TO EXPLORE").size(10.0).color(theme.colors.muted));
    });
}

fn speed(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.columns(2, |cols| {
        cols[0].vertical(|ui| {
            ui.add_space(80.0);
            headline(ui, theme, "ENGINEERED FOR", "SPEED.", 48.0);
            ui.add_space(16.0);
            body(
                ui,
                theme,
                "Traditional finance is slow, opaque, and brittle. Aetheris reimagines the stack from the hardware up, providing sub-millisecond settlement for global assets.",
            );
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                for (value, label) in [("0.4ms", "Latency"), ("99.9%", "Efficiency")] {
                    theme.card_frame().show(ui, |ui| {
                        ui.label(RichText::new(value).size(22.0).strong().color(theme.colors.accent));
                        section_caption(ui, theme, label);
                    });
                }
            });
        });
        cols[1].vertical(|ui| {
            ui.add_space(80.0);
            theme.card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                for line in BOOT_LOG {
                    ui.label(RichText::new(line).monospace().color(theme.colors.accent.gamma_multiply(0.7)));
                }
                ui.label(RichText::new("_").monospace().color(theme.colors.accent));
            });
        });
    });
}

fn capabilities(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("CORE CAPABILITIES").size(36.0).strong());
        ui.add_space(32.0);
    });
    ui.columns(CAPABILITIES.len(), |cols| {
        for (col, (title, desc)) in cols.iter_mut().zip(CAPABILITIES) {
            theme.card_frame().show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(title).size(20.0).strong());
                ui.add_space(8.0);
                ui.label(RichText::new(desc).size(13.0).color(theme.colors.muted));
            });
        }
    });
}

fn showcase(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.horizontal(|ui| {
            ui.label(RichText::new("THE PROTOCOL").size(56.0).strong().italics());
            ui.label(
                RichText::new("UNFOLDING.")
                    .size(56.0)
                    .strong()
                    .italics()
                    .color(theme.colors.accent),
            );
        });
    });
}

fn stats(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.add_space(ui.available_height() * 0.3);
    ui.columns(STATS.len(), |cols| {
        for (col, (value, label)) in cols.iter_mut().zip(STATS) {
            render_figure(col, theme, value, label);
        }
    });
}

fn ecosystem_path(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("THE ECOSYSTEM PATH").size(36.0).strong());
        ui.add_space(32.0);
    });
    for (i, (step, title, desc)) in PATH.iter().enumerate() {
        // Steps alternate sides
        let layout = if i % 2 == 0 {
            Layout::left_to_right(Align::Center)
        } else {
            Layout::right_to_left(Align::Center)
        };
        ui.with_layout(layout, |ui| {
            ui.label(RichText::new(*step).size(20.0).strong().color(theme.colors.accent));
            ui.add_space(16.0);
            theme.card_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(*title).size(18.0).strong());
                    ui.label(RichText::new(*desc).size(13.0).color(theme.colors.muted));
                });
            });
        });
        ui.add_space(16.0);
    }
}

fn perpetual_motion(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.label(
            RichText::new("PERPETUAL MOTION")
                .size(60.0)
                .strong()
                .color(theme.colors.text.gamma_multiply(0.2)),
        );
        ui.label(
            RichText::new("AETHERIS ENGINE V4.0.012-ALPHA")
                .size(11.0)
                .italics()
                .color(theme.colors.accent.gamma_multiply(0.5)),
        );
    });
}

fn testimonials(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.add_space(ui.available_height() * 0.3);
    ui.columns(TESTIMONIALS.len(), |cols| {
        for (col, (name, role, text)) in cols.iter_mut().zip(TESTIMONIALS) {
            theme.card_frame().show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(format!("\"{}\"", text)).size(16.0).italics());
                ui.add_space(16.0);
                ui.label(RichText::new(name).strong());
                section_caption(ui, theme, role);
            });
        }
    });
}

fn call_to_action(ui: &mut egui::Ui, theme: &Theme, launch: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        headline(ui, theme, "READY TO", "EVOLVE?", 72.0);
        ui.add_space(32.0);
        ui.horizontal(|ui| {
            if primary_button(ui, theme, "ENTER APP  →") {
                *launch = true;
            }
            secondary_button(ui, "DOCUMENTATION");
        });
        ui.add_space(40.0);
        section_caption(ui, theme, "No credit card required. Full decentralized access.");
    });
}

fn footer(ui: &mut egui::Ui, theme: &Theme, _launch: &mut bool) {
    ui.add_space(80.0);
    ui.separator();
    ui.columns(4, |cols| {
        cols[0].label(RichText::new("AETHERIS").size(22.0).strong().color(theme.colors.accent));
        cols[0].label(
            RichText::new(
                "Advancing the state of decentralized autonomous finance through neural mesh networking and high-performance protocols.",
            )
            .size(13.0)
            .color(theme.colors.muted),
        );
        for (col, (heading, links)) in cols[2..].iter_mut().zip([
            ("Protocol", ["Architecture", "Governance", "Security Audit", "Roadmap"]),
            ("Community", ["Discord", "Ecosystem Fund", "Documentation", "Grants"]),
        ]) {
            col.label(RichText::new(heading.to_uppercase()).size(11.0).strong());
            col.add_space(8.0);
            for link in links {
                col.label(RichText::new(link).size(13.0).color(theme.colors.muted));
            }
        }
    });
    ui.add_space(40.0);
    ui.separator();
    ui.horizontal(|ui| {
        section_caption(ui, theme, "© 2025 Aetheris Protocol Foundation. All rights reserved.");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            for item in ["Cookies", "Terms", "Privacy"] {
                section_caption(ui, theme, item);
                ui.add_space(16.0);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_clamped() {
        assert_eq!(scroll_progress(0.0, 900.0), 0.0);
        assert_eq!(scroll_progress(450.0, 900.0), 0.5);
        assert_eq!(scroll_progress(900.0, 900.0), 1.0);
        assert_eq!(scroll_progress(1200.0, 900.0), 1.0);
        assert_eq!(scroll_progress(-5.0, 900.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_without_overflow() {
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f32::NAN, 100.0), 0.0);
    }
}
