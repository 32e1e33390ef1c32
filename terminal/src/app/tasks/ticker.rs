//! # Ticker Timer
//!
//! Fixed-period task that asks the main thread to advance the market feed.
//! The task owns nothing but the channel sender; prices are mutated on the UI
//! thread when the event is handled.

use std::time::Duration;

use async_channel::Sender;
use tokio::task::JoinHandle;

use crate::app::events::AppEvent;
use crate::utils::runtime::TOKIO_RT;

/// Spawn the ticker on the shared runtime. Abort the returned handle to stop it.
///
/// The first event fires one full period after spawning. The task ends on its
/// own once the receiving side is dropped.
pub(crate) fn spawn_ticker(event_tx: Sender<AppEvent>, period: Duration) -> JoinHandle<()> {
    tracing::info!(period_ms = period.as_millis() as u64, "Starting market ticker");

    TOKIO_RT.spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // First tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if event_tx.send(AppEvent::MarketTick).await.is_err() {
                tracing::debug!("Ticker channel closed, stopping");
                break;
            }
        }
    })
}
