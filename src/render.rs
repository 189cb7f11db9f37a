//! Status line rendering

use chrono::{DateTime, Duration, Utc};

use crate::{state::TimerState, utils::format_duration};

/// Colour band for a running timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Less than a quarter left
    Red,
    /// Less than half left
    Yellow,
    /// More than half left
    Green,
}

impl Band {
    /// Pick the band for `remaining` out of `total`.
    ///
    /// Exactly half left matches none of the bands and yields `None`.
    pub fn for_remaining(remaining: Duration, total: Duration) -> Option<Self> {
        if remaining < total / 4 {
            Some(Self::Red)
        } else if remaining < total / 2 {
            Some(Self::Yellow)
        } else if remaining > total / 2 {
            Some(Self::Green)
        } else {
            None
        }
    }

    /// Pango colour value
    pub fn color(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "#00ff00",
        }
    }
}

/// Render the single output line, e.g. `Timer: 4m59s`
pub fn render(state: &TimerState, now: DateTime<Utc>, colors: bool) -> String {
    let value = format_duration(state.displayed(now));

    let band = if colors && state.is_running() {
        Band::for_remaining(state.remaining(now), state.duration)
    } else {
        None
    };

    match band {
        Some(band) => format!("Timer: <span color='{}'>{}</span>", band.color(), value),
        None => format!("Timer: {}", value),
    }
}
