//! Utility functions module
//! 
//! This module contains clock and duration helpers used throughout the application.

pub mod clock;

// Re-export main functions
pub use clock::{format_duration, now, truncate_to_seconds};
