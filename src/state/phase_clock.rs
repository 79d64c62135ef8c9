//! Phase clock: countdown value, phase flags and transition bookkeeping

use serde::{Deserialize, Serialize};

/// Shortest allowed phase, in seconds
pub const MIN_DURATION_SECONDS: u32 = 60;
/// Longest work phase, in seconds
pub const MAX_WORK_SECONDS: u32 = 60 * 60;
/// Longest break phase, in seconds
pub const MAX_BREAK_SECONDS: u32 = 20 * 60;

/// Current mode of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// The phase that follows this one
    pub fn next(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }

    /// Parse a phase from its path segment name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "work" => Some(Phase::Work),
            "break" => Some(Phase::Break),
            _ => None,
        }
    }

    /// Valid duration range for this phase, in seconds
    pub fn duration_range(self) -> (u32, u32) {
        match self {
            Phase::Work => (MIN_DURATION_SECONDS, MAX_WORK_SECONDS),
            Phase::Break => (MIN_DURATION_SECONDS, MAX_BREAK_SECONDS),
        }
    }

    /// Quantize to whole minutes and clamp into this phase's range
    pub fn clamp_duration(self, seconds: u32) -> u32 {
        let (min, max) = self.duration_range();
        let minutes = (seconds.saturating_add(30)) / 60;
        (minutes * 60).clamp(min, max)
    }
}

/// Configured phase durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub work_seconds: u32,
    pub break_seconds: u32,
}

impl TimerConfig {
    /// Build a config, snapping both durations to valid slider positions
    pub fn new(work_seconds: u32, break_seconds: u32) -> Self {
        Self {
            work_seconds: Phase::Work.clamp_duration(work_seconds),
            break_seconds: Phase::Break.clamp_duration(break_seconds),
        }
    }

    pub fn from_minutes(work_minutes: u32, break_minutes: u32) -> Self {
        Self::new(
            work_minutes.saturating_mul(60),
            break_minutes.saturating_mul(60),
        )
    }

    pub fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Break => self.break_seconds,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::from_minutes(25, 5)
    }
}

/// Live countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockState {
    pub remaining_seconds: u32,
    pub phase: Phase,
    pub is_running: bool,
}

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock is stopped; nothing changed
    Ignored,
    /// One second was consumed
    Decremented,
    /// The countdown was at zero and the clock entered the given phase
    Transitioned(Phase),
}

/// The Work/Break state machine.
///
/// States are the product of `phase` and `is_running`; ticks only act while
/// running, and durations only change while stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseClock {
    config: TimerConfig,
    state: ClockState,
}

impl PhaseClock {
    /// Stopped, in the work phase, with a full work countdown
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: ClockState {
                remaining_seconds: config.work_seconds,
                phase: Phase::Work,
                is_running: false,
            },
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn duration_of(&self, phase: Phase) -> u32 {
        self.config.duration_of(phase)
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Ignored;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            return TickOutcome::Decremented;
        }

        let next = self.state.phase.next();
        self.state.phase = next;
        self.state.remaining_seconds = self.config.duration_of(next);
        TickOutcome::Transitioned(next)
    }

    /// Change a phase duration. Returns false (and changes nothing) while running.
    pub fn set_duration(&mut self, phase: Phase, seconds: u32) -> bool {
        if self.state.is_running {
            return false;
        }

        let seconds = phase.clamp_duration(seconds);
        match phase {
            Phase::Work => self.config.work_seconds = seconds,
            Phase::Break => self.config.break_seconds = seconds,
        }

        // Editing the displayed phase restarts its countdown
        if phase == self.state.phase {
            self.state.remaining_seconds = seconds;
        }
        true
    }

    /// Flip the run state and return the new value
    pub fn toggle_run(&mut self) -> bool {
        self.state.is_running = !self.state.is_running;
        self.state.is_running
    }
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_minute_clock() -> PhaseClock {
        PhaseClock::new(TimerConfig::from_minutes(1, 1))
    }

    #[test]
    fn starts_stopped_in_work_with_full_countdown() {
        let clock = PhaseClock::default();
        assert_eq!(clock.phase(), Phase::Work);
        assert_eq!(clock.remaining_seconds(), 25 * 60);
        assert!(!clock.is_running());
    }

    #[test]
    fn tick_while_stopped_changes_nothing() {
        let mut clock = one_minute_clock();
        let before = clock.clone();
        for _ in 0..200 {
            assert_eq!(clock.tick(), TickOutcome::Ignored);
        }
        assert_eq!(clock, before);
    }

    #[test]
    fn running_tick_decrements_by_one() {
        let mut clock = one_minute_clock();
        clock.toggle_run();
        assert_eq!(clock.tick(), TickOutcome::Decremented);
        assert_eq!(clock.remaining_seconds(), 59);
        assert_eq!(clock.phase(), Phase::Work);
    }

    #[test]
    fn tick_at_zero_flips_phase_and_reloads() {
        let mut clock = PhaseClock::new(TimerConfig::from_minutes(1, 3));
        clock.toggle_run();
        for _ in 0..60 {
            assert_eq!(clock.tick(), TickOutcome::Decremented);
        }
        assert_eq!(clock.remaining_seconds(), 0);
        assert_eq!(clock.phase(), Phase::Work);

        assert_eq!(clock.tick(), TickOutcome::Transitioned(Phase::Break));
        assert_eq!(clock.remaining_seconds(), 180);
    }

    #[test]
    fn cycle_alternates_work_and_break() {
        let mut clock = one_minute_clock();
        clock.toggle_run();

        let mut transitions = Vec::new();
        for _ in 0..(61 * 4) {
            if let TickOutcome::Transitioned(phase) = clock.tick() {
                transitions.push(phase);
                assert_eq!(clock.remaining_seconds(), 60);
            }
        }

        assert_eq!(
            transitions,
            vec![Phase::Break, Phase::Work, Phase::Break, Phase::Work]
        );
    }

    #[test]
    fn set_duration_while_running_is_a_no_op() {
        let mut clock = one_minute_clock();
        clock.toggle_run();
        clock.tick();
        let before = clock.clone();

        assert!(!clock.set_duration(Phase::Work, 1500));
        assert!(!clock.set_duration(Phase::Break, 600));
        assert_eq!(clock, before);
    }

    #[test]
    fn set_duration_on_current_phase_resets_countdown() {
        let mut clock = PhaseClock::default();
        assert!(clock.set_duration(Phase::Work, 1500));
        assert_eq!(clock.remaining_seconds(), 1500);
        assert_eq!(clock.config().work_seconds, 1500);
    }

    #[test]
    fn set_duration_on_other_phase_keeps_countdown() {
        let mut clock = PhaseClock::default();
        assert!(clock.set_duration(Phase::Break, 600));
        assert_eq!(clock.remaining_seconds(), 25 * 60);
        assert_eq!(clock.config().break_seconds, 600);
    }

    #[test]
    fn durations_snap_to_slider_positions() {
        assert_eq!(Phase::Work.clamp_duration(0), 60);
        assert_eq!(Phase::Work.clamp_duration(89), 60);
        assert_eq!(Phase::Work.clamp_duration(90), 120);
        assert_eq!(Phase::Work.clamp_duration(10_000), 3600);
        assert_eq!(Phase::Break.clamp_duration(3600), 1200);
    }

    #[test]
    fn toggle_keeps_phase_and_countdown() {
        let mut clock = one_minute_clock();
        assert!(clock.toggle_run());
        clock.tick();
        assert!(!clock.toggle_run());
        assert_eq!(clock.phase(), Phase::Work);
        assert_eq!(clock.remaining_seconds(), 59);
    }

    #[test]
    fn phase_names_round_trip() {
        assert_eq!(Phase::from_name("work"), Some(Phase::Work));
        assert_eq!(Phase::from_name(Phase::Break.as_str()), Some(Phase::Break));
        assert_eq!(Phase::from_name("lunch"), None);
    }
}
