//! One invocation of the timer block: load, click, expire, autostart, render, save

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{apply_autostart, check_expiry, dispatch, Policy};
use crate::{
    render::render,
    services::{load_or_default, AlarmSink, StoreError, TimerStore},
    state::{Button, TimerState},
};

/// Side effect requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Alarm,
}

/// Result of advancing the state machine once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: TimerState,
    /// The state differs from what was loaded and must be saved
    pub changed: bool,
    pub effects: Vec<Effect>,
}

/// Pure transition: `(state, click, now) -> (state, effects)`
pub fn advance(
    mut state: TimerState,
    button: Option<Button>,
    now: DateTime<Utc>,
    policy: Policy,
) -> Outcome {
    let mut changed = dispatch(&mut state, button, now);
    let mut effects = Vec::new();

    if let Some(effect) = check_expiry(&mut state, now, policy) {
        effects.push(effect);
        changed = true;
    }
    if apply_autostart(&mut state, now, policy) {
        changed = true;
    }

    Outcome {
        state,
        changed,
        effects,
    }
}

/// Everything one run needs besides its ports
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    pub button: Option<Button>,
    pub now: DateTime<Utc>,
    pub policy: Policy,
    /// Used only when no state is stored yet
    pub default_duration: Duration,
    pub colors: bool,
}

impl Invocation {
    /// Run against the given store and alarm, returning the line to print.
    ///
    /// Nothing is rendered if the state cannot be loaded or saved.
    pub fn run<S, A>(&self, store: &S, alarm: &mut A) -> Result<String, StoreError>
    where
        S: TimerStore + ?Sized,
        A: AlarmSink + ?Sized,
    {
        let (state, created) = load_or_default(store, self.default_duration)?;
        debug!(
            "Loaded timer: duration={}s running={} show_elapsed={}",
            state.duration.num_seconds(),
            state.is_running(),
            state.show_elapsed
        );

        let outcome = advance(state, self.button, self.now, self.policy);
        for effect in &outcome.effects {
            match effect {
                Effect::Alarm => alarm.fire(),
            }
        }

        if outcome.state.is_less_than_one_minute_remaining(self.now) {
            debug!("Timer is within its last minute window");
        }

        if outcome.changed || created {
            store.save(&outcome.state)?;
        }

        Ok(render(&outcome.state, self.now, self.colors))
    }
}
