//! Aetheris desktop entry point.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

use aetheris::app::App;
use aetheris::debug::{self, DebugConfig};
use aetheris::ui::{self, scene_view, theme::Theme, widgets::notifications::NotificationManager};

const APP_TITLE: &str = "AETHERIS";

struct AetherisApp {
    app: App,
    notifications: NotificationManager,
    scene_view: scene_view::SceneView,
}

impl AetherisApp {
    fn new(cc: &eframe::CreationContext<'_>, debug_config: &DebugConfig) -> Self {
        let mut app = App::new();
        app.apply_debug_config(debug_config);

        let (theme_config, seed) = {
            let state = app.state.read();
            (state.config.theme.clone(), state.config.seed)
        };
        Theme::apply_custom_theme(&cc.egui_ctx, &theme_config);

        // Star field gets its own stream so it does not shift the particle seed
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(2)),
            None => StdRng::from_os_rng(),
        };

        Self {
            app,
            notifications: NotificationManager::new(),
            scene_view: scene_view::SceneView::new(&mut rng),
        }
    }
}

impl eframe::App for AetherisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let rect = ui::scene_rect(ctx);
        let (dt, hover) = ctx.input(|i| (i.stable_dt, i.pointer.hover_pos()));
        let aspect = if rect.height() > 0.0 {
            rect.width() / rect.height()
        } else {
            1.0
        };
        self.app.advance_frame(
            Duration::from_secs_f32(dt.max(0.0)),
            scene_view::pointer_ndc(rect, hover),
            aspect,
        );

        ui::render(ctx, &mut self.app, &mut self.notifications, &self.scene_view);
        self.notifications.show(ctx);

        // Scene animates continuously
        ctx.request_repaint();
    }
}

fn main() -> eframe::Result<()> {
    let debug_config = debug::init();
    tracing::info!(
        log_file = %debug_config.log_file().display(),
        debug_ui = debug_config.show_debug_ui,
        "Starting Aetheris"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(AetherisApp::new(cc, &debug_config)))),
    );

    if let Err(e) = &result {
        tracing::error!(error = %e, "Window closed with error");
    }
    result
}
