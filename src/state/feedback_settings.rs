//! Feedback settings structure

use serde::{Deserialize, Serialize};

/// Which feedback outputs the user has switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Tactile pulses on toggles, transitions and slider commits
    pub haptic_enabled: bool,
    /// Notification sound on phase transitions
    pub sound_enabled: bool,
}

impl FeedbackSettings {
    /// Create settings with both outputs enabled
    pub fn new() -> Self {
        Self {
            haptic_enabled: true,
            sound_enabled: true,
        }
    }

    pub fn with(haptic_enabled: bool, sound_enabled: bool) -> Self {
        Self {
            haptic_enabled,
            sound_enabled,
        }
    }

    /// Check whether every output is off
    pub fn all_muted(&self) -> bool {
        !self.haptic_enabled && !self.sound_enabled
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self::new()
    }
}
