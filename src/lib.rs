//! Custom Timer - A work/break interval timer
//!
//! This library provides the phase clock that alternates work and break
//! countdowns, the controller that owns it, the feedback and idle-suppression
//! adapters, and the HTTP control surface.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod view;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Phase, PhaseClock, TimerConfig};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
