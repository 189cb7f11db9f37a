//! Expiry, alarm, recurrence and autostart policies

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use super::Effect;
use crate::state::TimerState;

/// Behaviour switches applied after the click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    /// Start an idle timer on every invocation
    pub autostart: bool,
    /// Restart right after the alarm
    pub recurrent: bool,
}

/// Fire the alarm and reset if the run is over.
///
/// With `recurrent` the timer restarts at `now`; the overshoot of the previous
/// period is not carried over.
pub fn check_expiry(state: &mut TimerState, now: DateTime<Utc>, policy: Policy) -> Option<Effect> {
    if !state.is_running() || state.remaining(now) > Duration::zero() {
        return None;
    }

    info!(
        "Timer expired after {}s, firing alarm",
        state.elapsed(now).num_seconds()
    );
    state.reset();
    if policy.recurrent {
        debug!("Recurrent timer, restarting");
        state.start(now);
    }
    Some(Effect::Alarm)
}

/// Start an idle timer when autostart is on. Returns true if it started.
pub fn apply_autostart(state: &mut TimerState, now: DateTime<Utc>, policy: Policy) -> bool {
    if state.is_running() || !policy.autostart {
        return false;
    }
    debug!("Autostarting idle timer");
    state.start(now);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn started_ago(duration: Duration, ago: Duration) -> TimerState {
        let mut state = TimerState::new(duration);
        state.start(now() - ago);
        state
    }

    #[test]
    fn running_timer_with_time_left_is_untouched() {
        let mut state = started_ago(Duration::minutes(4), Duration::seconds(210));
        assert_eq!(check_expiry(&mut state, now(), Policy::default()), None);
        assert!(state.is_running());
    }

    #[test]
    fn exactly_zero_remaining_expires() {
        let mut state = started_ago(Duration::minutes(4), Duration::minutes(4));
        assert_eq!(
            check_expiry(&mut state, now(), Policy::default()),
            Some(Effect::Alarm)
        );
        assert!(!state.is_running());
        assert_eq!(state.duration, Duration::minutes(4));
    }

    #[test]
    fn sub_second_leftover_counts_as_expired() {
        let mut state = started_ago(
            Duration::minutes(1),
            Duration::seconds(59) + Duration::milliseconds(500),
        );
        assert_eq!(
            check_expiry(&mut state, now(), Policy::default()),
            Some(Effect::Alarm)
        );
    }

    #[test]
    fn recurrent_timer_restarts_from_now() {
        let mut state = started_ago(Duration::minutes(2), Duration::minutes(10));
        let policy = Policy {
            recurrent: true,
            ..Policy::default()
        };
        assert_eq!(check_expiry(&mut state, now(), policy), Some(Effect::Alarm));
        assert_eq!(state.start_time, Some(now()));
        assert_eq!(state.remaining(now()), Duration::minutes(2));
    }

    #[test]
    fn idle_timer_never_expires() {
        let mut state = TimerState::new(Duration::zero());
        assert_eq!(check_expiry(&mut state, now(), Policy::default()), None);
    }

    #[test]
    fn autostart_only_applies_when_enabled_and_idle() {
        let policy = Policy {
            autostart: true,
            ..Policy::default()
        };

        let mut state = TimerState::new(Duration::minutes(5));
        assert!(!apply_autostart(&mut state, now(), Policy::default()));
        assert!(apply_autostart(&mut state, now(), policy));
        assert_eq!(state.remaining(now()), Duration::minutes(5));

        let mut running = started_ago(Duration::minutes(5), Duration::seconds(30));
        let before = running.clone();
        assert!(!apply_autostart(&mut running, now(), policy));
        assert_eq!(running, before);
    }
}
