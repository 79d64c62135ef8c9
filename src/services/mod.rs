//! Platform adapter module
//!
//! This module contains the feedback emitter and the thin adapters for sound,
//! haptics and idle-timer suppression.

pub mod feedback;
pub mod sound;
pub mod haptics;
pub mod idle;

// Re-export main types
pub use feedback::{FeedbackEmitter, FeedbackKind, HapticPlayer, HapticStyle, NoopHaptics, NoopSound, SoundPlayer};
pub use sound::CanberraSoundPlayer;
pub use haptics::LoggingHaptics;
pub use idle::{IdleInhibitor, IdleLock};
