//! One-second metronome driving the phase clock

use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{error, info};

use crate::state::AppState;

/// Production tick period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick emitter. Knows nothing about run state.
pub struct TickSource;

impl TickSource {
    /// Call `on_tick` once per `period`, starting one period from now
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> TickHandle
    where
        F: FnMut() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            // A stalled runtime must not replay a burst of seconds
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                on_tick();
            }
        });

        TickHandle { task }
    }
}

/// Owner of a running tick source. Dropping it stops the ticks.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
}

impl TickHandle {
    /// Stop emitting ticks
    pub fn stop(self) {
        info!("Stopping tick source");
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start ticking the shared clock once per second
pub fn spawn_clock_ticker(state: Arc<AppState>) -> TickHandle {
    info!("Starting tick source");
    TickSource::spawn(TICK_PERIOD, move || {
        if let Err(e) = state.tick() {
            error!("Failed to apply tick: {}", e);
        }
    })
}
