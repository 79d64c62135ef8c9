//! State management module
//!
//! This module contains the phase clock, feedback settings and the controller
//! that owns them.

pub mod phase_clock;
pub mod feedback_settings;
pub mod app_state;

// Re-export main types
pub use phase_clock::{ClockState, Phase, PhaseClock, TickOutcome, TimerConfig};
pub use feedback_settings::FeedbackSettings;
pub use app_state::{AppState, ClockEvent, ClockSnapshot, CommitOutcome};
