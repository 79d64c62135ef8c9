//! Haptic output for desktops without a tactile actuator

use tracing::debug;

use super::feedback::{HapticPlayer, HapticStyle};

/// Records each pulse as a structured log event (visible with `--verbose`)
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHaptics;

impl HapticPlayer for LoggingHaptics {
    fn pulse(&self, style: HapticStyle) {
        debug!(target: "custom_timer::haptics", ?style, "haptic pulse");
    }
}
