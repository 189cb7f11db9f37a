//! Timer state machine module
//! 
//! This module turns one click into state transitions and side effects, and
//! drives a complete invocation against the store and alarm ports.

pub mod dispatch;
pub mod expiry;
pub mod invocation;

// Re-export main functions
pub use dispatch::dispatch;
pub use expiry::{apply_autostart, check_expiry, Policy};
pub use invocation::{advance, Effect, Invocation, Outcome};
