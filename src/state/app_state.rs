//! Main application state: the controller that owns the clock

use std::{
    sync::{Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::services::{FeedbackEmitter, FeedbackKind};
use super::{ClockState, FeedbackSettings, Phase, PhaseClock, TickOutcome, TimerConfig};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub clock: ClockState,
    pub config: TimerConfig,
    pub feedback: FeedbackSettings,
}

/// Discrete state changes for side-effect listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ClockEvent {
    RunStateChanged(bool),
    PhaseChanged(Phase),
    DurationCommitted(Phase, u32),
    FeedbackChanged(FeedbackSettings),
}

/// Result of a slider commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Duration stored; carries the updated snapshot
    Applied(ClockSnapshot),
    /// Clock is running, sliders are disabled; nothing changed
    Locked(ClockSnapshot),
}

/// Clock plus feedback settings, mutated together under one lock
#[derive(Debug)]
struct TimerModel {
    clock: PhaseClock,
    feedback: FeedbackSettings,
}

impl TimerModel {
    fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            clock: self.clock.state(),
            config: self.clock.config(),
            feedback: self.feedback,
        }
    }
}

/// Controller that owns the timer config, clock state and feedback settings.
///
/// All mutation goes through these methods. Every accepted change publishes a
/// fresh [`ClockSnapshot`] and any [`ClockEvent`] while the model lock is
/// still held, so subscribers observe changes in the order they were applied.
#[derive(Debug)]
pub struct AppState {
    model: Mutex<TimerModel>,
    emitter: FeedbackEmitter,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for discrete state change notifications
    event_tx: broadcast::Sender<ClockEvent>,
    /// Channel for snapshot updates
    snapshot_tx: watch::Sender<ClockSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<ClockSnapshot>,
}

impl AppState {
    /// Create a stopped clock in the work phase
    pub fn new(
        port: u16,
        host: String,
        config: TimerConfig,
        feedback: FeedbackSettings,
        emitter: FeedbackEmitter,
    ) -> Self {
        let model = TimerModel {
            clock: PhaseClock::new(config),
            feedback,
        };
        let (event_tx, _) = broadcast::channel(100);
        let (snapshot_tx, snapshot_rx) = watch::channel(model.snapshot());

        Self {
            model: Mutex::new(model),
            emitter,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            event_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    fn lock_model(&self) -> Result<MutexGuard<'_, TimerModel>, String> {
        self.model
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    fn publish(&self, model: &TimerModel) -> ClockSnapshot {
        let snapshot = model.snapshot();
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send snapshot update: {}", e);
        }
        snapshot
    }

    fn notify(&self, event: ClockEvent) {
        // Only fails when nobody is listening
        if self.event_tx.send(event).is_err() {
            debug!("No listeners for clock event {:?}", event);
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Subscribe to snapshot updates (for renderers)
    pub fn subscribe_snapshots(&self) -> watch::Receiver<ClockSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to discrete clock events (for side-effect tasks)
    pub fn subscribe_events(&self) -> broadcast::Receiver<ClockEvent> {
        self.event_tx.subscribe()
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Result<ClockSnapshot, String> {
        Ok(self.lock_model()?.snapshot())
    }

    /// Get the current feedback settings
    pub fn feedback_settings(&self) -> Result<FeedbackSettings, String> {
        Ok(self.lock_model()?.feedback)
    }

    /// Apply one tick from the tick source
    pub fn tick(&self) -> Result<TickOutcome, String> {
        let mut model = self.lock_model()?;
        let outcome = model.clock.tick();

        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Decremented => {
                self.publish(&model);
            }
            TickOutcome::Transitioned(phase) => {
                info!("Phase complete, entering {} for {}s",
                      phase.as_str(), model.clock.remaining_seconds());
                self.emitter.emit(FeedbackKind::PhaseTransition, &model.feedback);
                self.publish(&model);
                self.notify(ClockEvent::PhaseChanged(phase));
            }
        }

        Ok(outcome)
    }

    /// Start/stop button
    pub fn toggle_run(&self) -> Result<ClockSnapshot, String> {
        let mut model = self.lock_model()?;
        let running = model.clock.toggle_run();
        info!("Timer {}", if running { "started" } else { "stopped" });

        self.emitter.emit(FeedbackKind::RunToggle, &model.feedback);
        let snapshot = self.publish(&model);
        self.notify(ClockEvent::RunStateChanged(running));
        drop(model);

        self.record_action(if running { "start" } else { "stop" });
        Ok(snapshot)
    }

    /// Slider "editing finished" for the given phase
    pub fn commit_duration(&self, phase: Phase, minutes: u32) -> Result<CommitOutcome, String> {
        let mut model = self.lock_model()?;
        let seconds = phase.clamp_duration(minutes.saturating_mul(60));

        if !model.clock.set_duration(phase, seconds) {
            debug!("Ignoring {} duration commit while running", phase.as_str());
            return Ok(CommitOutcome::Locked(model.snapshot()));
        }

        info!("{} duration set to {} min", phase.as_str(), seconds / 60);
        self.emitter.emit(FeedbackKind::ControlAck, &model.feedback);
        let snapshot = self.publish(&model);
        self.notify(ClockEvent::DurationCommitted(phase, seconds));
        drop(model);

        self.record_action(match phase {
            Phase::Work => "set-work",
            Phase::Break => "set-break",
        });
        Ok(CommitOutcome::Applied(snapshot))
    }

    /// Haptics toggle
    pub fn set_haptic_enabled(&self, enabled: bool) -> Result<ClockSnapshot, String> {
        self.update_feedback("haptics", |settings| settings.haptic_enabled = enabled)
    }

    /// Sounds toggle
    pub fn set_sound_enabled(&self, enabled: bool) -> Result<ClockSnapshot, String> {
        self.update_feedback("sounds", |settings| settings.sound_enabled = enabled)
    }

    fn update_feedback<F>(&self, action: &str, updater: F) -> Result<ClockSnapshot, String>
    where
        F: FnOnce(&mut FeedbackSettings),
    {
        let mut model = self.lock_model()?;
        updater(&mut model.feedback);
        let settings = model.feedback;
        let snapshot = self.publish(&model);
        self.notify(ClockEvent::FeedbackChanged(settings));
        drop(model);

        info!("Feedback settings: haptic={}, sound={}",
              settings.haptic_enabled, settings.sound_enabled);
        self.record_action(action);
        Ok(snapshot)
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::{feedback::testing::{recording_emitter, Recorder}, HapticStyle};

    fn state_with(config: TimerConfig) -> (AppState, Arc<Recorder>) {
        let (emitter, recorder) = recording_emitter();
        let state = AppState::new(0, "127.0.0.1".to_string(), config, FeedbackSettings::new(), emitter);
        (state, recorder)
    }

    #[test]
    fn ticks_while_stopped_publish_nothing() {
        let (state, recorder) = state_with(TimerConfig::from_minutes(1, 1));
        let rx = state.subscribe_snapshots();
        let before = state.snapshot().unwrap();

        for _ in 0..120 {
            assert_eq!(state.tick().unwrap(), TickOutcome::Ignored);
        }

        assert_eq!(state.snapshot().unwrap(), before);
        assert!(!rx.has_changed().unwrap());
        assert_eq!(recorder.sound_count(), 0);
        assert!(recorder.pulses().is_empty());
    }

    #[test]
    fn full_cycle_emits_one_transition_per_phase() {
        let (state, recorder) = state_with(TimerConfig::from_minutes(1, 1));
        let mut events = state.subscribe_events();
        state.toggle_run().unwrap();

        for _ in 0..61 {
            state.tick().unwrap();
        }
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.clock.phase, Phase::Break);
        assert_eq!(snapshot.clock.remaining_seconds, 60);
        assert_eq!(recorder.sound_count(), 1);

        for _ in 0..61 {
            state.tick().unwrap();
        }
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.clock.phase, Phase::Work);
        assert_eq!(snapshot.clock.remaining_seconds, 60);
        assert_eq!(recorder.sound_count(), 2);

        // run toggle + two transitions
        assert_eq!(
            recorder.pulses(),
            vec![HapticStyle::Light, HapticStyle::Light, HapticStyle::Light]
        );

        assert_eq!(events.try_recv().unwrap(), ClockEvent::RunStateChanged(true));
        assert_eq!(events.try_recv().unwrap(), ClockEvent::PhaseChanged(Phase::Break));
        assert_eq!(events.try_recv().unwrap(), ClockEvent::PhaseChanged(Phase::Work));
    }

    #[test]
    fn every_toggle_pulses() {
        let (state, recorder) = state_with(TimerConfig::default());
        for _ in 0..4 {
            state.toggle_run().unwrap();
        }
        assert_eq!(recorder.pulses().len(), 4);
        assert_eq!(recorder.sound_count(), 0);
        assert!(!state.snapshot().unwrap().clock.is_running);
    }

    #[test]
    fn commit_while_stopped_applies_and_acks_once() {
        let (state, recorder) = state_with(TimerConfig::default());
        let outcome = state.commit_duration(Phase::Work, 25).unwrap();

        let CommitOutcome::Applied(snapshot) = outcome else {
            panic!("expected commit to apply, got {:?}", outcome);
        };
        assert_eq!(snapshot.clock.remaining_seconds, 1500);
        assert_eq!(recorder.pulses(), vec![HapticStyle::Success]);
        assert_eq!(state.get_last_action().0.as_deref(), Some("set-work"));
    }

    #[test]
    fn commit_while_running_is_locked() {
        let (state, recorder) = state_with(TimerConfig::default());
        state.toggle_run().unwrap();
        state.tick().unwrap();
        let before = state.snapshot().unwrap();

        let outcome = state.commit_duration(Phase::Break, 10).unwrap();
        assert_eq!(outcome, CommitOutcome::Locked(before));
        assert_eq!(state.snapshot().unwrap(), before);
        // only the toggle pulse
        assert_eq!(recorder.pulses(), vec![HapticStyle::Light]);
    }

    #[test]
    fn commit_with_haptics_disabled_stays_silent() {
        let (state, recorder) = state_with(TimerConfig::default());
        state.set_haptic_enabled(false).unwrap();
        assert!(matches!(
            state.commit_duration(Phase::Break, 3).unwrap(),
            CommitOutcome::Applied(_)
        ));
        assert!(recorder.pulses().is_empty());
        assert_eq!(state.snapshot().unwrap().config.break_seconds, 180);
    }

    #[test]
    fn feedback_toggles_apply_while_running() {
        let (state, recorder) = state_with(TimerConfig::from_minutes(1, 1));
        state.toggle_run().unwrap();
        state.set_sound_enabled(false).unwrap();
        state.set_haptic_enabled(false).unwrap();

        for _ in 0..61 {
            state.tick().unwrap();
        }

        assert_eq!(state.snapshot().unwrap().clock.phase, Phase::Break);
        assert_eq!(recorder.sound_count(), 0);
        assert_eq!(recorder.pulses(), vec![HapticStyle::Light]);
        assert_eq!(state.feedback_settings().unwrap(), FeedbackSettings::with(false, false));
    }

    #[test]
    fn decrementing_ticks_publish_snapshots() {
        let (state, _recorder) = state_with(TimerConfig::from_minutes(2, 1));
        state.toggle_run().unwrap();
        let mut rx = state.subscribe_snapshots();

        state.tick().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().clock.remaining_seconds, 119);
    }
}
