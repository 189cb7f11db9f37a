//! i3-timer - A click-driven countdown timer block for status bars
//! 
//! Each invocation loads the persisted timer, applies at most one click,
//! handles expiry (alarm, recurrence) and autostart, saves any change, and
//! renders a single status line.

pub mod config;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use render::render;
pub use state::{Button, TimerState};
pub use tasks::{advance, Invocation, Policy};
