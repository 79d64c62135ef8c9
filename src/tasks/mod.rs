//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP control surface.

pub mod tick_source;
pub mod idle_guard;
pub mod renderer;

// Re-export main functions
pub use tick_source::{spawn_clock_ticker, TickHandle, TickSource, TICK_PERIOD};
pub use idle_guard::idle_guard_task;
pub use renderer::renderer_task;
