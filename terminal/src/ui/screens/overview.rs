//! # Network Overview Screen
//!
//! Protocol-wide demo metrics: stat cards, the revenue bar chart, node
//! cluster health and the auto-compounding card. The dashboard sits on the
//! left two thirds so the scene core stays visible on the right.

use egui::{Rect, RichText, Sense, Stroke, Vec2};

use crate::app::{AppLike, AppState, View};
use crate::dashboard::{self, NodeCluster};
use crate::ui::theme::Theme;
use crate::ui::widgets::header::{render_sub_header, section_caption};
use crate::ui::widgets::stat_card::render_stat_card;

const CHART_HEIGHT: f32 = 220.0;

/// Title and subtitle for a dashboard view
pub fn header_text(view: View) -> (&'static str, &'static str) {
    match view {
        View::MyPage => (
            View::MyPage.title(),
            "Secure management of your neural assets and vault positions.",
        ),
        _ => (
            View::Overview.title(),
            "Real-time protocol metrics and liquidity health.",
        ),
    }
}

/// Render the overview dashboard
pub fn render(ui: &mut egui::Ui, state: &AppState, _app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.config.theme);
    let (title, subtitle) = header_text(View::Overview);
    render_sub_header(ui, &theme, title, subtitle, dashboard::ACCOUNT_BADGE);
    ui.add_space(24.0);

    egui::ScrollArea::vertical()
        .id_salt("overview_scroll")
        .show(ui, |ui| {
            ui.columns(3, |cols| {
                render_stat_card(&mut cols[0], &theme, &dashboard::STAT_CARDS[0]);
                render_stat_card(&mut cols[1], &theme, &dashboard::STAT_CARDS[1]);
                render_compounding_card(&mut cols[2], &theme);
            });
            ui.add_space(16.0);

            ui.columns(3, |cols| {
                render_revenue_card(&mut cols[0], &theme, &state.dashboard.revenue);
                render_node_clusters(&mut cols[1], &theme);
            });
        });
}

fn render_revenue_card(ui: &mut egui::Ui, theme: &Theme, revenue: &[f64]) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Protocol Revenue").size(18.0).strong());
                section_caption(ui, theme, "Last 30 Days");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for range in dashboard::REVENUE_RANGES.iter().rev() {
                    ui.selectable_label(*range == dashboard::ACTIVE_REVENUE_RANGE, *range);
                }
            });
        });
        ui.add_space(12.0);

        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), CHART_HEIGHT),
            Sense::hover(),
        );
        paint_revenue_bars(ui.painter(), rect, revenue, theme);
    });
}

/// Bar rectangles for `revenue` inside `rect`. Heights are percentages,
/// clamped to `[0, 100]`.
pub fn revenue_bar_rects(rect: Rect, revenue: &[f64]) -> Vec<Rect> {
    if revenue.is_empty() {
        return Vec::new();
    }
    let slot = rect.width() / revenue.len() as f32;
    let gap = (slot * 0.2).min(4.0);
    revenue
        .iter()
        .enumerate()
        .map(|(i, pct)| {
            let h = (pct.clamp(0.0, 100.0) as f32 / 100.0) * rect.height();
            let left = rect.left() + i as f32 * slot;
            Rect::from_min_max(
                egui::pos2(left, rect.bottom() - h),
                egui::pos2(left + slot - gap, rect.bottom()),
            )
        })
        .collect()
}

fn paint_revenue_bars(painter: &egui::Painter, rect: Rect, revenue: &[f64], theme: &Theme) {
    let last = revenue.len().saturating_sub(1);
    for (i, bar) in revenue_bar_rects(rect, revenue).into_iter().enumerate() {
        // Latest bar is highlighted
        let color = if i == last {
            theme.colors.accent
        } else {
            theme.colors.accent.gamma_multiply(0.25)
        };
        painter.rect_filled(bar, 2.0, color);
    }
}

fn render_node_clusters(ui: &mut egui::Ui, theme: &Theme) {
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, "Node Clusters");
        ui.add_space(12.0);
        for cluster in &dashboard::NODE_CLUSTERS {
            render_cluster_row(ui, theme, cluster);
            ui.add_space(10.0);
        }
    });
}

fn render_cluster_row(ui: &mut egui::Ui, theme: &Theme, cluster: &NodeCluster) {
    let status_color = if cluster.warning {
        theme.colors.warning
    } else {
        theme.colors.accent
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(cluster.location).size(12.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(cluster.status).size(11.0).color(status_color));
        });
    });
    let bar = egui::ProgressBar::new(f32::from(cluster.load) / 100.0)
        .desired_height(4.0)
        .fill(status_color);
    ui.add(bar);
}

fn render_compounding_card(ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::new()
        .fill(theme.colors.accent.gamma_multiply(0.08))
        .stroke(Stroke::new(1.0, theme.colors.accent.gamma_multiply(0.3)))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⟳").size(22.0).color(theme.colors.accent));
                ui.vertical(|ui| {
                    ui.label(RichText::new("Auto-Compounding").strong());
                    ui.label(
                        RichText::new("PROTOCOL ACTIVE")
                            .size(10.0)
                            .strong()
                            .color(theme.colors.accent),
                    );
                });
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "The neural engine is currently rebalancing {} liquidity pools to maximize yield across the mesh.",
                    format_thousands(dashboard::POOLS_REBALANCING)
                ))
                .size(12.0)
                .color(theme.colors.muted),
            );
        });
}

fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_text() {
        assert_eq!(header_text(View::Overview).0, "Network Overview");
        assert_eq!(header_text(View::MyPage).0, "User Terminal");
    }

    #[test]
    fn test_revenue_bars_clamped_to_chart() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), Vec2::new(300.0, 100.0));
        let bars = revenue_bar_rects(rect, &[-15.0, 50.0, 140.0]);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].height(), 0.0);
        assert_eq!(bars[1].height(), 50.0);
        assert_eq!(bars[2].height(), 100.0);
        assert!(bars.iter().all(|b| rect.contains_rect(*b)));
        assert!(revenue_bar_rects(rect, &[]).is_empty());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(4_821), "4,821");
        assert_eq!(format_thousands(12), "12");
    }
}
