//! Idle guard background task

use std::sync::Arc;
use tokio::sync::{broadcast::error::RecvError, oneshot};
use tracing::{debug, error, info, warn};

use crate::{
    services::IdleLock,
    state::{AppState, ClockEvent},
};

/// Background task that keeps the display awake while the clock runs
pub async fn idle_guard_task<L: IdleLock>(
    state: Arc<AppState>,
    mut lock: L,
    mut shutdown: oneshot::Receiver<()>,
) {
    info!("Starting idle guard task");

    let mut events = state.subscribe_events();

    // The clock may already be running if this task started late
    match state.snapshot() {
        Ok(snapshot) => apply_run_state(&mut lock, snapshot.clock.is_running).await,
        Err(e) => error!("Failed to read initial run state: {}", e),
    }

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Ok(ClockEvent::RunStateChanged(running)) => {
                    apply_run_state(&mut lock, running).await;
                }
                Ok(other) => {
                    debug!("Idle guard ignoring {:?}", other);
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Idle guard lagged by {} events, resyncing", skipped);
                    if let Ok(snapshot) = state.snapshot() {
                        apply_run_state(&mut lock, snapshot.clock.is_running).await;
                    }
                }
                Err(RecvError::Closed) => {
                    debug!("Clock event channel closed");
                    break;
                }
            },

            _ = &mut shutdown => {
                debug!("Idle guard received shutdown");
                break;
            }
        }
    }

    if let Err(e) = lock.release().await {
        warn!("Failed to release idle lock on shutdown: {}", e);
    }
    info!("Idle guard task stopped");
}

async fn apply_run_state<L: IdleLock>(lock: &mut L, running: bool) {
    let result = if running {
        lock.acquire().await
    } else {
        lock.release().await
    };

    if let Err(e) = result {
        warn!("Idle suppression unavailable: {}", e);
    }
}
