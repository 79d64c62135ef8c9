//! Feedback emitter: routes feedback events to sound and haptic outputs

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::FeedbackSettings;

/// What happened that deserves a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// Countdown reached zero and the phase flipped
    PhaseTransition,
    /// Start/stop button pressed
    RunToggle,
    /// A duration slider finished editing
    ControlAck,
}

/// Tactile pulse category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticStyle {
    Light,
    Success,
}

/// Plays the fixed notification sound. Best effort, never fails.
pub trait SoundPlayer: Send + Sync {
    fn play(&self);
}

/// Triggers a tactile pulse. Best effort, never fails.
pub trait HapticPlayer: Send + Sync {
    fn pulse(&self, style: HapticStyle);
}

/// Sound output that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSound;

impl SoundPlayer for NoopSound {
    fn play(&self) {}
}

/// Haptic output that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl HapticPlayer for NoopHaptics {
    fn pulse(&self, _style: HapticStyle) {}
}

/// Dispatches feedback events, honouring the enabled flags
#[derive(Clone)]
pub struct FeedbackEmitter {
    sound: Arc<dyn SoundPlayer>,
    haptics: Arc<dyn HapticPlayer>,
}

impl FeedbackEmitter {
    pub fn new(sound: Arc<dyn SoundPlayer>, haptics: Arc<dyn HapticPlayer>) -> Self {
        Self { sound, haptics }
    }

    /// An emitter with no outputs attached
    pub fn silent() -> Self {
        Self::new(Arc::new(NoopSound), Arc::new(NoopHaptics))
    }

    /// Emit a feedback event.
    ///
    /// Sound is tied to phase completion only. Haptics fire for every kind,
    /// with slider commits using the success pulse.
    pub fn emit(&self, kind: FeedbackKind, settings: &FeedbackSettings) {
        debug!("Emitting feedback: {:?} (haptic={}, sound={})",
               kind, settings.haptic_enabled, settings.sound_enabled);

        if kind == FeedbackKind::PhaseTransition && settings.sound_enabled {
            self.sound.play();
        }

        if settings.haptic_enabled {
            let style = match kind {
                FeedbackKind::PhaseTransition | FeedbackKind::RunToggle => HapticStyle::Light,
                FeedbackKind::ControlAck => HapticStyle::Success,
            };
            self.haptics.pulse(style);
        }
    }
}

impl std::fmt::Debug for FeedbackEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackEmitter").finish_non_exhaustive()
    }
}
