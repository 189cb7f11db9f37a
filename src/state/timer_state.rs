//! Timer state structure and management

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::clock::{self, truncate_to_seconds};

/// Longest duration, in minutes, that still fits in i64 nanoseconds on disk
pub const MAX_DURATION_MINUTES: i64 = i64::MAX / 60_000_000_000;

/// Persisted timer record
///
/// `start_time` is `None` while idle. On disk the idle state is written as the
/// zero timestamp `0001-01-01T00:00:00Z` so existing state files keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Configured countdown length, never negative after a mutation
    #[serde(default = "clock::zero", with = "nanos")]
    pub duration: Duration,
    /// Instant the current run started
    #[serde(default, with = "start_time")]
    pub start_time: Option<DateTime<Utc>>,
    /// Show elapsed instead of remaining time
    #[serde(default)]
    pub show_elapsed: bool,
}

impl TimerState {
    /// Create an idle timer with the given duration
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            start_time: None,
            show_elapsed: false,
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// Time since start, zero while idle
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self.start_time {
            Some(start) => now - start,
            None => clock::zero(),
        }
    }

    /// Remaining time truncated to whole seconds. Negative once overdue.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        truncate_to_seconds(self.duration - self.elapsed(now))
    }

    /// `(now - start) - duration < 1 minute`
    ///
    /// This is measured from the start instant, not from the remaining time, so
    /// it holds for the whole run and for one minute past expiry. An idle timer
    /// reports false.
    pub fn is_less_than_one_minute_remaining(&self, now: DateTime<Utc>) -> bool {
        match self.start_time {
            Some(start) => (now - start) - self.duration < Duration::minutes(1),
            None => false,
        }
    }

    /// The value shown in the bar: elapsed or remaining, in whole seconds
    pub fn displayed(&self, now: DateTime<Utc>) -> Duration {
        if self.show_elapsed {
            truncate_to_seconds(self.elapsed(now))
        } else {
            self.remaining(now)
        }
    }

    /// Add one minute. Returns false, leaving the duration alone, if that
    /// would exceed `MAX_DURATION_MINUTES`.
    pub fn add_minute(&mut self) -> bool {
        let next = self.duration + Duration::minutes(1);
        if next > Duration::minutes(MAX_DURATION_MINUTES) {
            return false;
        }
        self.duration = next;
        true
    }

    /// Remove one minute, clamping at zero. Returns false if the duration was
    /// already zero and nothing changed.
    pub fn remove_minute(&mut self) -> bool {
        if self.duration <= clock::zero() {
            return false;
        }
        self.duration = (self.duration - Duration::minutes(1)).max(clock::zero());
        true
    }

    pub fn start(&mut self, now: DateTime<Utc>) {
        self.start_time = Some(now);
    }

    pub fn reset(&mut self) {
        self.start_time = None;
    }

    pub fn toggle_view(&mut self) {
        self.show_elapsed = !self.show_elapsed;
    }
}

/// Signed nanosecond encoding for `duration`
mod nanos {
    use chrono::Duration;
    use serde::{ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = duration
            .num_nanoseconds()
            .ok_or_else(|| S::Error::custom("duration exceeds i64 nanoseconds"))?;
        serializer.serialize_i64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        i64::deserialize(deserializer).map(Duration::nanoseconds)
    }
}

/// RFC 3339 encoding for `startTime` with the zero timestamp meaning idle
mod start_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Zero timestamp written for an idle timer
    pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";
    const ZERO_TIME_UNIX: i64 = -62_135_596_800;

    pub fn serialize<S: Serializer>(
        start: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match start {
            Some(instant) => instant.serialize(serializer),
            None => serializer.serialize_str(ZERO_TIME),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let start = Option::<DateTime<Utc>>::deserialize(deserializer)?;
        Ok(start.filter(|instant| !is_zero(instant)))
    }

    fn is_zero(instant: &DateTime<Utc>) -> bool {
        instant.timestamp() == ZERO_TIME_UNIX && instant.timestamp_subsec_nanos() == 0
    }
}
