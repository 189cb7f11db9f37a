//! External collaborator module
//! 
//! This module contains the ports the timer talks to: the state file and the
//! alarm command.

pub mod alarm;
pub mod store;

// Re-export main types
pub use alarm::{AlarmSink, CommandAlarm, RecordingAlarm};
pub use store::{load_or_default, FileStore, MemoryStore, StoreError, TimerStore};
