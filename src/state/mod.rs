//! State management module
//! 
//! This module contains the persisted timer record and the click signals that mutate it.

pub mod button;
pub mod timer_state;

// Re-export main types
pub use button::Button;
pub use timer_state::{TimerState, MAX_DURATION_MINUTES};
