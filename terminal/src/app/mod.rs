//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, the ticker timer task and
//! the shared application state. It also owns the renderer-side scene state,
//! which never leaves the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick()        drain timer events               │   │
//! │  │  - advance_frame()  scene step + particle advance    │   │
//! │  │  - handle_*()       user actions                     │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - current view, coins, overlay binding, config      │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Ticker task (shared Tokio runtime)             │
//! │  - sends AppEvent::MarketTick every interval                │
//! │  - alive only while the markets view is shown               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ticker task never touches prices. The main thread applies each tick
//! through the [`MarketFeed`] so a seeded feed gives reproducible prices.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use aetheris::app::{App, View};
//! use aetheris::core::AppConfig;
//!
//! let mut app = App::with_config(AppConfig::default());
//! app.handle_launch();
//! app.handle_view_change(View::Markets);
//! app.handle_coin_select("BTC");
//!
//! // every frame
//! app.on_tick();
//! app.advance_frame(std::time::Duration::from_millis(16), [0.0, 0.0], 16.0 / 9.0);
//! ```

mod app_trait;
mod events;
pub mod handlers;
pub mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use handlers::navigation::ViewTransition;
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use rand::{rngs::StdRng, SeedableRng};
use tokio::task::JoinHandle;

use crate::core::config::AppConfig;
use crate::core::service::MarketFeed;
use crate::dashboard;
use crate::debug::{DebugConfig, FrameMetrics};
use crate::market::{ChartEmbed, SimulatedFeed};
use crate::scene::{self, ParticleField, SceneInputs, SceneState};

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; the UI renders from a cloned snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for timer events. Polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into spawned tasks
    event_tx: Sender<AppEvent>,

    /// Time elapsed since last frame
    pub last_tick: Duration,

    /// Seconds of scene time accumulated from frame deltas
    pub elapsed: f32,

    /// Current poses, fed back into the next `scene::step`
    pub scene: SceneState,

    pub particles: ParticleField,

    pub frame_metrics: FrameMetrics,

    feed: Box<dyn MarketFeed>,

    /// Particle and revenue-bar randomness
    rng: StdRng,

    ticker: Option<JoinHandle<()>>,
}

impl App {
    /// Load configuration from disk (falling back to defaults) and build the app.
    pub fn new() -> Self {
        Self::with_config(crate::core::config::load_config())
    }

    /// Build the app with the simulated feed.
    pub fn with_config(config: AppConfig) -> Self {
        let feed = SimulatedFeed::new(config.ticker.clone(), config.seed);
        Self::with_feed(config, Box::new(feed))
    }

    /// Build the app around an arbitrary price source.
    pub fn with_feed(config: AppConfig, feed: Box<dyn MarketFeed>) -> Self {
        // Offset so particles don't share a stream with the ticker
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };
        let particles = ParticleField::new(config.scene.landing_particles, &mut rng);

        let mut state = AppState::new(config);
        state.feed_name = feed.name();

        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            feed = feed.name(),
            seeded = state.config.seed.is_some(),
            "App state initialized"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            last_tick: Duration::ZERO,
            elapsed: 0.0,
            scene: SceneState::default(),
            particles,
            frame_metrics: FrameMetrics::default(),
            feed,
            rng,
            ticker: None,
        }
    }

    /// Called every frame to process pending timer events.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            processed += 1;
            self.handle_event(event);
        }
        if processed > 1 {
            tracing::debug!(processed, "on_tick: processed queued events");
        }
    }

    /// Advance the scene by one rendered frame.
    ///
    /// `pointer` is in normalized device coordinates (y up), `aspect` is the
    /// width/height ratio of the area the scene is drawn into.
    pub fn advance_frame(&mut self, dt: Duration, pointer: [f32; 2], aspect: f32) {
        let dt_secs = dt.as_secs_f32();
        self.last_tick = dt;
        self.elapsed += dt_secs;
        self.frame_metrics.record_frame(dt);

        let (view, scroll_offset, scene_config) = {
            let state = self.state.read();
            (
                state.current_view,
                state.landing.scroll_offset,
                state.config.scene.clone(),
            )
        };

        let inputs = SceneInputs {
            view,
            elapsed: self.elapsed,
            scroll_offset,
            pointer,
            viewport: scene::viewport_at(aspect, self.scene.camera_z),
        };
        self.scene = scene::step_with(&self.scene, &inputs, dt_secs, scene_config.damping);

        self.particles
            .ensure_count(scene_config.particle_count(view), &mut self.rng);
        self.particles.advance(dt_secs);
    }

    /// Handle async event results
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MarketTick => self.apply_market_tick(),
        }
    }

    fn apply_market_tick(&mut self) {
        let mut state = self.state.write();
        if state.current_view != View::Markets {
            tracing::debug!("Dropping market tick outside markets view");
            return;
        }

        self.feed.advance(&mut state.markets.coins);
        state.markets.tick_count += 1;
        state.markets.last_tick = Some(chrono::Local::now());
        tracing::debug!(tick = state.markets.tick_count, feed = self.feed.name(), "Applied market tick");
    }

    fn after_transition(&mut self, transition: ViewTransition) {
        if transition.left(View::Markets) {
            self.stop_ticker();
        }
        if transition.entered(View::Markets) {
            self.start_ticker();
        }
        if transition.entered(View::Overview) {
            let revenue = dashboard::revenue_series(&mut self.rng);
            self.state.write().dashboard.revenue = revenue;
        }
    }

    fn start_ticker(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let period = Duration::from_millis(self.state.read().config.ticker.interval_ms.max(1));
        self.ticker = Some(tasks::ticker::spawn_ticker(self.event_tx.clone(), period));
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            tracing::info!("Stopped market ticker");
        }
    }

    pub fn is_ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle view change
    pub fn handle_view_change(&mut self, view: View) {
        let t = handlers::navigation::handle_view_change(self.state.clone(), view);
        self.after_transition(t);
    }

    /// Header launch/exit toggle
    pub fn handle_launch_toggle(&mut self) {
        let t = handlers::navigation::handle_launch_toggle(self.state.clone());
        self.after_transition(t);
    }

    /// Landing call-to-action
    pub fn handle_launch(&mut self) {
        let t = handlers::navigation::handle_launch(self.state.clone());
        self.after_transition(t);
    }

    /// Navigate to next view in Tab order
    pub fn next_view(&mut self) {
        match handlers::navigation::next_view(self.state.clone()) {
            Ok(t) => self.after_transition(t),
            Err(e) => tracing::warn!(error = %e, "Tab navigation skipped"),
        }
    }

    /// Navigate to previous view in Tab order
    pub fn previous_view(&mut self) {
        match handlers::navigation::previous_view(self.state.clone()) {
            Ok(t) => self.after_transition(t),
            Err(e) => tracing::warn!(error = %e, "Tab navigation skipped"),
        }
    }

    /// Record the landing page scroll progress
    pub fn handle_scroll(&mut self, offset: f32) {
        let offset = if offset.is_finite() { offset.clamp(0.0, 1.0) } else { 0.0 };
        self.state.write().landing.scroll_offset = offset;
    }

    pub fn handle_coin_select(&mut self, symbol: &str) {
        handlers::markets::handle_coin_select(self.state.clone(), symbol);
    }

    pub fn handle_coin_close(&mut self) {
        handlers::markets::handle_coin_close(self.state.clone());
    }

    pub fn handle_search_change(&mut self, query: String) {
        handlers::markets::handle_search_change(self.state.clone(), query);
    }

    /// Hand the full chart for `symbol` to the system browser
    pub fn handle_open_chart(&mut self, symbol: &str) {
        if let Err(e) = ChartEmbed::for_symbol(symbol).open_external() {
            tracing::error!(symbol, error = %e, "Chart hand-off failed");
            self.state
                .write()
                .notify(NotificationLevel::Error, e.to_string());
        }
    }

    pub fn toggle_debug_overlay(&mut self) {
        handlers::settings::handle_toggle_debug_overlay(self.state.clone());
    }

    pub fn apply_debug_config(&mut self, debug: &DebugConfig) {
        handlers::settings::apply_debug_config(self.state.clone(), debug);
    }

    pub fn handle_settings_save(&mut self) {
        handlers::settings::handle_settings_save(self.state.clone());
    }

    /// Get a clone of the event sender
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_view_change(&mut self, view: View) {
        App::handle_view_change(self, view)
    }

    fn handle_launch_toggle(&mut self) {
        App::handle_launch_toggle(self)
    }

    fn handle_launch(&mut self) {
        App::handle_launch(self)
    }

    fn next_view(&mut self) {
        App::next_view(self)
    }

    fn previous_view(&mut self) {
        App::previous_view(self)
    }

    fn handle_scroll(&mut self, offset: f32) {
        App::handle_scroll(self, offset)
    }

    fn handle_coin_select(&mut self, symbol: &str) {
        App::handle_coin_select(self, symbol)
    }

    fn handle_coin_close(&mut self) {
        App::handle_coin_close(self)
    }

    fn handle_search_change(&mut self, query: String) {
        App::handle_search_change(self, query)
    }

    fn handle_open_chart(&mut self, symbol: &str) {
        App::handle_open_chart(self, symbol)
    }

    fn toggle_debug_overlay(&mut self) {
        App::toggle_debug_overlay(self)
    }

    fn handle_settings_save(&mut self) {
        App::handle_settings_save(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{initial_coins, Coin};

    fn seeded_app() -> App {
        App::with_config(AppConfig {
            seed: Some(7),
            ..AppConfig::default()
        })
    }

    fn view(app: &App) -> View {
        app.state.read().current_view
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_app_starts_on_landing() {
        let app = seeded_app();
        assert_eq!(view(&app), View::Landing);
        assert!(!app.is_ticker_running());
        assert_eq!(app.particles.len(), 40);
    }

    #[test]
    fn test_view_navigation_full_cycle() {
        let mut app = seeded_app();
        for expected in [View::Overview, View::Markets, View::MyPage, View::Landing] {
            app.next_view();
            assert_eq!(view(&app), expected);
        }
        assert!(!app.is_ticker_running());
    }

    #[test]
    fn test_ticker_runs_only_on_markets() {
        let mut app = seeded_app();
        app.handle_view_change(View::Markets);
        assert!(app.is_ticker_running());

        app.handle_view_change(View::Markets);
        assert!(app.is_ticker_running());

        app.handle_view_change(View::Overview);
        assert!(!app.is_ticker_running());
    }

    #[test]
    fn test_exit_from_markets_stops_ticker() {
        let mut app = seeded_app();
        app.handle_view_change(View::Markets);
        app.handle_launch_toggle();
        assert_eq!(view(&app), View::Landing);
        assert!(!app.is_ticker_running());
    }

    #[test]
    fn test_entering_overview_builds_revenue() {
        let mut app = seeded_app();
        assert!(app.state.read().dashboard.revenue.is_empty());
        app.handle_launch();
        assert_eq!(
            app.state.read().dashboard.revenue.len(),
            dashboard::REVENUE_BARS
        );
    }

    // ========== Market Tick Tests ==========

    #[test]
    fn test_tick_applies_only_on_markets() {
        let mut app = seeded_app();
        app.handle_event(AppEvent::MarketTick);
        assert_eq!(app.state.read().markets.coins, initial_coins());
        assert_eq!(app.state.read().markets.tick_count, 0);

        app.handle_view_change(View::Markets);
        app.handle_event(AppEvent::MarketTick);
        let state = app.state.read();
        assert_ne!(state.markets.coins, initial_coins());
        assert_eq!(state.markets.tick_count, 1);
        assert!(state.markets.last_tick.is_some());
    }

    #[test]
    fn test_on_tick_drains_channel() {
        let mut app = seeded_app();
        app.handle_view_change(View::Markets);
        let tx = app.event_tx();
        for _ in 0..3 {
            tx.try_send(AppEvent::MarketTick).unwrap();
        }
        app.on_tick();
        assert_eq!(app.state.read().markets.tick_count, 3);
    }

    #[test]
    fn test_seeded_apps_tick_identically() {
        let mut a = seeded_app();
        let mut b = seeded_app();
        for app in [&mut a, &mut b] {
            app.handle_view_change(View::Markets);
            for _ in 0..5 {
                app.handle_event(AppEvent::MarketTick);
            }
        }
        assert_eq!(a.state.read().markets.coins, b.state.read().markets.coins);
    }

    struct FlatFeed;

    impl MarketFeed for FlatFeed {
        fn advance(&mut self, coins: &mut [Coin]) {
            for coin in coins {
                coin.price = 1.0;
            }
        }

        fn name(&self) -> &'static str {
            "flat"
        }
    }

    #[test]
    fn test_custom_feed() {
        let mut app = App::with_feed(AppConfig::default(), Box::new(FlatFeed));
        assert_eq!(app.state.read().feed_name, "flat");
        app.handle_view_change(View::Markets);
        app.handle_event(AppEvent::MarketTick);
        assert!(app.state.read().markets.coins.iter().all(|c| c.price == 1.0));
    }

    #[test]
    fn test_markets_revisit_starts_from_initial_prices() {
        let mut app = seeded_app();
        app.handle_view_change(View::Markets);
        for _ in 0..5 {
            app.handle_event(AppEvent::MarketTick);
        }
        assert_ne!(app.state.read().markets.coins, initial_coins());

        app.handle_view_change(View::Overview);
        app.handle_view_change(View::Markets);

        let state = app.state.read();
        assert_eq!(state.markets.coins, initial_coins());
        assert_eq!(state.markets.tick_count, 0);
        assert!(state.markets.last_tick.is_none());
    }

    #[test]
    fn test_debug_ui_flag_sets_overlay() {
        let mut app = seeded_app();
        app.apply_debug_config(&DebugConfig {
            show_debug_ui: true,
            ..DebugConfig::default()
        });
        assert!(app.state.read().debug_overlay_visible);
    }

    // ========== Scene Tests ==========

    #[test]
    fn test_particle_count_follows_view() {
        let mut app = seeded_app();
        let dt = Duration::from_millis(16);
        app.advance_frame(dt, [0.0, 0.0], 1.6);
        assert_eq!(app.particles.len(), 40);

        app.handle_launch();
        app.advance_frame(dt, [0.0, 0.0], 1.6);
        assert_eq!(app.particles.len(), 20);

        app.handle_view_change(View::Markets);
        app.advance_frame(dt, [0.0, 0.0], 1.6);
        assert_eq!(app.particles.len(), 20);
    }

    #[test]
    fn test_scene_eases_toward_markets_pose() {
        let mut app = seeded_app();
        app.handle_view_change(View::Markets);
        for _ in 0..300 {
            app.advance_frame(Duration::from_millis(16), [0.0, 0.0], 1.6);
        }
        assert!((app.scene.main.scale - 0.6).abs() < 1e-3);
        assert!(app.scene.main.position.x < 0.0);
        assert!((app.scene.camera_z - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = seeded_app();
        app.handle_scroll(3.0);
        assert_eq!(app.state.read().landing.scroll_offset, 1.0);
        app.handle_scroll(-1.0);
        assert_eq!(app.state.read().landing.scroll_offset, 0.0);
        app.handle_scroll(f32::NAN);
        assert_eq!(app.state.read().landing.scroll_offset, 0.0);
    }

    // ========== Integration Tests ==========

    #[test]
    fn test_markets_overlay_scenario() {
        let mut app = seeded_app();
        assert_eq!(view(&app), View::Landing);

        app.handle_launch();
        assert_eq!(view(&app), View::Overview);

        app.handle_view_change(View::Markets);
        assert_eq!(view(&app), View::Markets);

        app.handle_coin_select("BTC");
        app.handle_event(AppEvent::MarketTick);
        {
            let state = app.state.read();
            let coin = state.markets.selected_coin().expect("overlay bound to BTC");
            assert_eq!(coin.symbol, "BTC");
            let live = state.markets.coins.iter().find(|c| c.symbol == "BTC").unwrap();
            assert_eq!(coin.price, live.price);
        }

        app.handle_coin_select("ETH");
        assert_eq!(app.state.read().markets.selected.as_deref(), Some("ETH"));

        app.handle_coin_close();
        let state = app.state.read();
        assert!(state.markets.selected.is_none());
        assert_eq!(state.current_view, View::Markets);
    }
}
