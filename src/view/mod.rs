//! View module
//!
//! This module turns clock snapshots into the values a screen displays.

pub mod clock_view;

// Re-export main types
pub use clock_view::ClockView;
