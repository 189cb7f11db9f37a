//! Button to transition mapping

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::state::{Button, TimerState};

/// Apply the click, if any, to the state.
///
/// Illegal transitions are silently ignored. Returns true when the state
/// changed and must be persisted.
pub fn dispatch(state: &mut TimerState, button: Option<Button>, now: DateTime<Utc>) -> bool {
    let Some(button) = button else {
        return false;
    };

    let running = state.is_running();
    let changed = match button {
        Button::Left if running => {
            state.toggle_view();
            true
        }
        Button::Middle if !running => {
            state.start(now);
            true
        }
        Button::Right if running => {
            state.reset();
            true
        }
        Button::ScrollUp if !running => state.add_minute(),
        Button::ScrollDown if !running => state.remove_minute(),
        _ => false,
    };

    if changed {
        debug!("Button {} applied, running={}", button, state.is_running());
    } else {
        debug!("Button {} ignored, running={}", button, running);
    }
    changed
}
