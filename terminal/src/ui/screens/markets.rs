//! # Markets Screen
//!
//! Live ticker table over the simulated feed. Layout:
//!
//! - header with the live indicator and the search box
//! - three ticker cards for the first three coins
//! - the filtered market table, one clickable row per coin
//! - the detail overlay for the selected coin, if any
//!
//! The overlay is bound to a symbol, not to a copied record, so it always
//! shows the price from the latest tick.

use egui::{Align, Align2, Layout, RichText, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints};

use crate::app::{AppLike, AppState, NotificationLevel};
use crate::market::{format_usd, Coin};
use crate::ui::theme::Theme;
use crate::ui::widgets::header::section_caption;
use crate::ui::widgets::live_indicator::render_live_indicator;
use crate::ui::widgets::sparkline::render_sparkline;

const TOP_CARDS: usize = 3;
const ROW_HEIGHT: f32 = 52.0;

/// Id of the detail overlay window
pub const DETAIL_WINDOW_ID: &str = "coin_detail_overlay";

const ADVISORY: &str = "Strong buy sentiment detected across neural-sync protocols. \
Market structure remains bullish on higher timeframes.";

/// Change as shown in the table: magnitude with a direction arrow
pub fn change_label(change: f64) -> String {
    let arrow = if change >= 0.0 { "↗" } else { "↘" };
    format!("{} {}%", arrow, change.abs())
}

/// Signed change as shown on cards and in the overlay
pub fn signed_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// Render the markets screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::from_config(&state.config.theme);
    let markets = &state.markets;

    render_header(ui, state, app, &theme);
    ui.add_space(20.0);

    ui.columns(TOP_CARDS, |cols| {
        for (col, coin) in cols.iter_mut().zip(markets.coins.iter().take(TOP_CARDS)) {
            render_ticker_card(col, coin, &theme);
        }
    });
    ui.add_space(20.0);

    let visible = markets.visible_coins();
    let mut clicked: Option<String> = None;
    theme.card_frame().show(ui, |ui| {
        if visible.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.colored_label(theme.colors.muted, format!("No assets match \"{}\"", markets.search));
                ui.add_space(20.0);
            });
        } else {
            clicked = render_table(ui, &visible, &theme);
        }
    });

    if let Some(symbol) = clicked {
        app.handle_coin_select(&symbol);
    }

    if let Some(coin) = markets.selected_coin() {
        let rank = markets
            .coins
            .iter()
            .position(|c| c.symbol == coin.symbol)
            .map_or(0, |i| i + 1);
        render_detail_overlay(ui.ctx(), coin, rank, &theme, app);
    }
}

fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("LIVE MARKETS").size(34.0).strong());
            render_live_indicator(ui, true, "REAL-TIME TRADING TERMINALS ACTIVE", theme);
            if let Some(at) = state.markets.last_tick {
                ui.label(
                    RichText::new(format!("Last tick {}", at.format("%H:%M:%S")))
                        .size(10.0)
                        .color(theme.colors.muted),
                );
            }
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let mut search = state.markets.search.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("🔍 Search assets (BTC, SOL, ETH...)")
                    .desired_width(320.0),
            );
            if response.changed() {
                app.handle_search_change(search);
            }
        });
    });
}

fn render_ticker_card(ui: &mut egui::Ui, coin: &Coin, theme: &Theme) {
    let trend = theme.price_change_color(coin.change);
    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(coin.symbol.chars().next().map(String::from).unwrap_or_default())
                    .size(20.0)
                    .strong()
                    .color(theme.colors.accent),
            );
            ui.vertical(|ui| {
                ui.label(RichText::new(&coin.name).strong());
                section_caption(ui, theme, &coin.pair());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(signed_change(coin.change)).size(12.0).strong().color(trend));
            });
        });
        ui.add_space(8.0);
        ui.label(RichText::new(format_usd(coin.price)).size(24.0).strong());
        ui.add_space(8.0);
        render_sparkline(ui, &coin.sparkline, Vec2::new(ui.available_width(), 48.0), trend);
    });
}

/// Returns the symbol of the clicked row
fn render_table(ui: &mut egui::Ui, coins: &[&Coin], theme: &Theme) -> Option<String> {
    let mut clicked = None;

    TableBuilder::new(ui)
        .id_salt("markets_table")
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::exact(128.0))
        .column(Column::exact(36.0))
        .header(32.0, |mut header| {
            for title in ["Asset", "Price", "24h Change", "High / Low", "Volume (24h)", "Recent Trend", ""] {
                header.col(|ui| {
                    section_caption(ui, theme, title);
                });
            }
        })
        .body(|mut body| {
            for coin in coins {
                let trend = theme.price_change_color(coin.change);
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(&coin.symbol).monospace().strong().color(theme.colors.muted));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&coin.name).strong());
                            ui.label(RichText::new(&coin.symbol).size(10.0).monospace().color(theme.colors.muted));
                        });
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format_usd(coin.price)).monospace());
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(change_label(coin.change)).strong().color(trend));
                    });
                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("H: ${}", coin.high)).size(10.0).color(theme.colors.muted));
                            ui.label(RichText::new(format!("L: ${}", coin.low)).size(10.0).color(theme.colors.muted));
                        });
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("${}", coin.volume)).color(theme.colors.muted));
                    });
                    row.col(|ui| {
                        render_sparkline(ui, &coin.sparkline, Vec2::new(112.0, 28.0), trend);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new("⛶").color(theme.colors.muted));
                    });

                    if row.response().clicked() {
                        clicked = Some(coin.symbol.clone());
                    }
                });
            }
        });

    clicked
}

fn render_detail_overlay(
    ctx: &egui::Context,
    coin: &Coin,
    rank: usize,
    theme: &Theme,
    app: &mut impl AppLike,
) {
    let mut open = true;
    let mut open_chart = false;
    let mut demo_trade: Option<&'static str> = None;

    egui::Window::new(format!("{} Analysis", coin.name.to_uppercase()))
        .id(egui::Id::new(DETAIL_WINDOW_ID))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .default_size([960.0, 560.0])
        .show(ctx, |ui| {
            section_caption(ui, theme, "Live terminal powered by TradingView");
            ui.separator();

            ui.horizontal_top(|ui| {
                let side_width = 260.0;
                let chart_width = (ui.available_width() - side_width - 16.0).max(240.0);

                ui.vertical(|ui| {
                    ui.set_width(chart_width);
                    let points: PlotPoints = coin
                        .sparkline
                        .iter()
                        .enumerate()
                        .map(|(i, v)| [i as f64, *v])
                        .collect();
                    Plot::new(("coin_detail_plot", &coin.symbol))
                        .height(380.0)
                        .allow_drag(false)
                        .allow_zoom(false)
                        .allow_scroll(false)
                        .show_axes([false, true])
                        .show(ui, |plot_ui| {
                            plot_ui.line(
                                Line::new(format!("{}USDT", coin.symbol), points)
                                    .color(theme.price_change_color(coin.change))
                                    .width(2.0),
                            );
                        });
                    if ui.button("↗ Open full chart").clicked() {
                        open_chart = true;
                    }
                });

                ui.add_space(16.0);

                ui.vertical(|ui| {
                    ui.set_width(side_width);
                    if let Some(side) = render_detail_sidebar(ui, coin, rank, theme) {
                        demo_trade = Some(side);
                    }
                });
            });
        });

    if open_chart {
        app.handle_open_chart(&coin.symbol);
    }
    if let Some(side) = demo_trade {
        tracing::info!(symbol = %coin.symbol, side, "Demo trade button pressed");
        app.state().write().notify(
            NotificationLevel::Info,
            format!("Execute {} {}: demo only, no order placed", side, coin.symbol),
        );
    }
    if !open {
        app.handle_coin_close();
    }
}

/// Price, metrics, demo trade buttons and the advisory note.
/// Returns the demo trade side pressed, if any.
fn render_detail_sidebar(ui: &mut egui::Ui, coin: &Coin, rank: usize, theme: &Theme) -> Option<&'static str> {
    let mut pressed = None;
    ui.label(RichText::new(format_usd(coin.price)).size(28.0).strong());
    ui.label(
        RichText::new(format!("{} (24h)", signed_change(coin.change)))
            .size(12.0)
            .strong()
            .color(theme.price_change_color(coin.change)),
    );
    ui.add_space(12.0);

    theme.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        section_caption(ui, theme, "Market Metrics");
        ui.add_space(6.0);
        egui::Grid::new(("coin_metrics", &coin.symbol))
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Market Cap", format!("${}", coin.market_cap)),
                    ("Volume (24h)", format!("${}", coin.volume)),
                    ("24h High", format_usd(coin.high)),
                    ("24h Low", format_usd(coin.low)),
                    ("Market Rank", format!("#{}", rank)),
                ] {
                    ui.label(RichText::new(label.to_uppercase()).size(10.0).color(theme.colors.muted));
                    ui.label(RichText::new(value).size(12.0).strong());
                    ui.end_row();
                }
            });
    });
    ui.add_space(12.0);

    let long = egui::Button::new(RichText::new("EXECUTE LONG").strong().color(theme.colors.background))
        .fill(theme.colors.positive);
    if ui.add_sized([ui.available_width(), 40.0], long).clicked() {
        pressed = Some("Long");
    }
    let short = egui::Button::new(RichText::new("EXECUTE SHORT").strong()).fill(theme.colors.negative);
    if ui.add_sized([ui.available_width(), 40.0], short).clicked() {
        pressed = Some("Short");
    }
    ui.add_space(12.0);

    theme.card_frame().show(ui, |ui| {
        ui.label(RichText::new("⚡ NEURAL ALERT").size(10.0).strong().color(theme.colors.accent));
        ui.label(RichText::new(ADVISORY).size(11.0).color(theme.colors.muted));
    });
    pressed
}
