//! Mouse button signals delivered by the block runner

use std::{fmt, str::FromStr};

/// The click that triggered this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left click toggles elapsed/remaining display
    Left,
    /// Middle click starts the timer
    Middle,
    /// Right click stops the timer
    Right,
    /// Scroll up adds a minute
    ScrollUp,
    /// Scroll down removes a minute
    ScrollDown,
}

impl Button {
    /// Parse an optional raw signal, treating anything unrecognized as no click
    pub fn from_signal(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.trim().parse().ok())
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Left => "1",
            Self::Middle => "2",
            Self::Right => "3",
            Self::ScrollUp => "4",
            Self::ScrollDown => "5",
        }
    }
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Left),
            "2" => Ok(Self::Middle),
            "3" => Ok(Self::Right),
            "4" => Ok(Self::ScrollUp),
            "5" => Ok(Self::ScrollDown),
            other => Err(format!("unknown button: {:?}", other)),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
