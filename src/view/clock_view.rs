//! Presentation values derived from a clock snapshot

use serde::{Deserialize, Serialize};

use crate::state::{ClockSnapshot, Phase};

/// Everything the screen shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockView {
    /// Big number in the middle of the dial
    pub display_minutes: u32,
    /// Fill fraction of the circular indicator, in [0, 1)
    pub progress: f64,
    pub phase_label: String,
    pub button_label: String,
    pub work_label: String,
    pub break_label: String,
    /// Sliders are disabled while running
    pub sliders_enabled: bool,
    pub muted: bool,
}

impl ClockView {
    pub fn from_snapshot(snapshot: &ClockSnapshot) -> Self {
        let clock = snapshot.clock;
        let duration = snapshot.config.duration_of(clock.phase);

        Self {
            display_minutes: display_minutes(clock.remaining_seconds, duration),
            progress: progress(clock.remaining_seconds),
            phase_label: match clock.phase {
                Phase::Work => "WORK".to_string(),
                Phase::Break => "BREAK".to_string(),
            },
            button_label: if clock.is_running { "STOP" } else { "START" }.to_string(),
            work_label: format!("Work: {} min", snapshot.config.work_seconds / 60),
            break_label: format!("Break: {} min", snapshot.config.break_seconds / 60),
            sliders_enabled: !clock.is_running,
            muted: snapshot.feedback.all_muted(),
        }
    }
}

/// Minutes shown on the dial.
///
/// Mid-countdown the value rounds up, so "1" stays visible until the last
/// second elapses. A full countdown shows the configured length.
pub fn display_minutes(remaining_seconds: u32, duration_seconds: u32) -> u32 {
    if remaining_seconds != duration_seconds {
        remaining_seconds.div_ceil(60)
    } else {
        (duration_seconds + 30) / 60
    }
}

/// Fraction of the current minute still to run
pub fn progress(remaining_seconds: u32) -> f64 {
    f64::from(remaining_seconds % 60) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClockState, FeedbackSettings, TimerConfig};

    fn snapshot(remaining: u32, phase: Phase, running: bool) -> ClockSnapshot {
        ClockSnapshot {
            clock: ClockState {
                remaining_seconds: remaining,
                phase,
                is_running: running,
            },
            config: TimerConfig::from_minutes(25, 5),
            feedback: FeedbackSettings::new(),
        }
    }

    #[test]
    fn full_countdown_shows_configured_minutes() {
        let view = ClockView::from_snapshot(&snapshot(1500, Phase::Work, false));
        assert_eq!(view.display_minutes, 25);
        assert_eq!(view.button_label, "START");
        assert!(view.sliders_enabled);
    }

    #[test]
    fn mid_countdown_rounds_up() {
        assert_eq!(display_minutes(1499, 1500), 25);
        assert_eq!(display_minutes(1440, 1500), 24);
        assert_eq!(display_minutes(1, 60), 1);
        assert_eq!(display_minutes(0, 60), 0);
    }

    #[test]
    fn progress_tracks_seconds_within_the_minute() {
        assert_eq!(progress(1500), 0.0);
        assert_eq!(progress(1530), 0.5);
        assert!((progress(59) - 59.0 / 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn running_break_view() {
        let view = ClockView::from_snapshot(&snapshot(250, Phase::Break, true));
        assert_eq!(view.display_minutes, 5);
        assert_eq!(view.phase_label, "BREAK");
        assert_eq!(view.button_label, "STOP");
        assert_eq!(view.work_label, "Work: 25 min");
        assert_eq!(view.break_label, "Break: 5 min");
        assert!(!view.sliders_enabled);
        assert!(!view.muted);
    }
}
