//! # GUI Theme
//!
//! Near-black glass panels with cyan and magenta accents for egui.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Serializable palette, persisted as part of [`crate::core::config::AppConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background
    pub background: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Cyan accent (brand, active nav, primary buttons)
    pub accent: [u8; 3],
    /// Magenta accent (outer ring, secondary highlights)
    pub accent_alt: [u8; 3],
    /// Panel borders
    pub border: [u8; 3],
    /// Gains
    pub positive: [u8; 3],
    /// Losses
    pub negative: [u8; 3],
    pub warning: [u8; 3],
    /// Secondary text
    pub muted: [u8; 3],
    /// Card fill
    pub panel: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [5, 5, 5],
            text: [255, 255, 255],
            accent: [34, 211, 238],
            accent_alt: [244, 114, 182],
            border: [38, 38, 38],
            positive: [74, 222, 128],
            negative: [248, 113, 113],
            warning: [250, 204, 21],
            muted: [156, 163, 175],
            panel: [14, 14, 16],
        }
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

impl ThemeConfig {
    pub fn to_colors(&self) -> AetherisColors {
        AetherisColors {
            background: rgb(self.background),
            text: rgb(self.text),
            accent: rgb(self.accent),
            accent_alt: rgb(self.accent_alt),
            border: rgb(self.border),
            positive: rgb(self.positive),
            negative: rgb(self.negative),
            warning: rgb(self.warning),
            muted: rgb(self.muted),
            panel: rgb(self.panel),
        }
    }
}

/// Resolved palette
#[derive(Debug, Clone, Copy)]
pub struct AetherisColors {
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub border: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
    pub muted: Color32,
    pub panel: Color32,
}

impl Default for AetherisColors {
    fn default() -> Self {
        ThemeConfig::default().to_colors()
    }
}

/// Application theme
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub colors: AetherisColors,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            colors: config.to_colors(),
        }
    }

    /// Get color for price change percentage
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change > 0.0 {
            self.colors.positive
        } else if change < 0.0 {
            self.colors.negative
        } else {
            self.colors.muted
        }
    }

    /// Format price change with color
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        let text = if change >= 0.0 {
            format!("+{:.2}%", change)
        } else {
            format!("{:.2}%", change)
        };
        (text, self.price_change_color(change))
    }

    /// Frame used for cards and panels
    pub fn card_frame(&self) -> egui::Frame {
        egui::Frame::new()
            .fill(self.colors.panel.gamma_multiply(0.85))
            .stroke(Stroke::new(1.0, self.colors.border))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(16))
    }

    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let colors = config.to_colors();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.faint_bg_color = Color32::from_rgb(12, 12, 14);
        visuals.extreme_bg_color = Color32::from_rgb(10, 10, 10);
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(20, 20, 22);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(24, 38, 42);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(12, 52, 60);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = colors.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply custom theme to an egui context
    pub fn apply_custom_theme(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
            });
        }

        tracing::debug!("Applied theme visuals");
    }
}
