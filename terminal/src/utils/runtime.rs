//! Shared Tokio runtime
//!
//! eframe owns the main thread and runs its own event loop, so background
//! timers are spawned onto this process-wide runtime instead:
//!
//! ```rust,ignore
//! use crate::utils::runtime::TOKIO_RT;
//!
//! let handle = TOKIO_RT.spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     let _ = event_tx.send(AppEvent::MarketTick).await;
//! });
//! handle.abort();
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("aetheris-timer")
        .enable_time()
        .build()
        .expect("Failed to create Tokio runtime for background timers")
});
