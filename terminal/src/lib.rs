//! # Aetheris Terminal - Library Root
//!
//! A **native desktop front-end** for the Aetheris demo protocol: a scroll-driven
//! landing page over an animated 3D scene, two dashboards and a simulated live
//! markets table. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Features
//!
//! - **Animated scene**: icosahedron core, two rings and orbiting debris, eased
//!   toward a per-view pose every frame
//! - **Markets**: seven coins moved by a timer-driven random walk, search,
//!   sparklines and a per-coin detail overlay
//! - **Dashboards**: fixed demo figures for the network overview and the user terminal
//! - **External chart**: hands the full chart for a coin to the system browser
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              aetheris (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe   - Immediate-mode GUI, native window   │
//! │  egui_plot       - Detail overlay chart                │
//! │  egui_extras     - Markets table                       │
//! │  Tokio           - Ticker timer task                   │
//! │  tracing         - Structured logging                  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: view controller, shared state, handlers and the ticker task
//! - **core**: configuration, error type and the market feed seam
//! - **dashboard**: demo records behind the dashboard screens
//! - **debug**: logging setup, frame metrics
//! - **market**: coin records, the simulated ticker, chart hand-off
//! - **scene**: pose math, the per-frame animator and the particle field
//! - **ui**: scene projection, screens, widgets and theme
//! - **utils**: shared Tokio runtime
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   ├── market (feed, coins, chart)
//!   │   ├── scene (step, particles)
//!   │   └── dashboard (revenue series)
//!   │
//!   └── ui (rendering)
//!       ├── scene_view (projection of scene state)
//!       ├── screens::* (landing, overview, mypage, markets)
//!       ├── widgets::* (header, cards, sparkline, toasts)
//!       └── theme (colors, styles)
//! ```
//!
//! ## Core Concepts
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Shared**: the UI and handlers read and write through one lock
//! - **Locked briefly**: screens render from a cloned snapshot
//!
//! ### Timer Events
//!
//! The ticker task only sends [`AppEvent::MarketTick`]; prices change on the UI
//! thread in [`App::on_tick`] through the [`core::service::MarketFeed`].
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! ```

pub mod app;
pub mod core;
pub mod dashboard;
pub mod debug;
pub mod market;
pub mod scene;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, View};
pub use core::{AppError, Result};
