//! Configuration and CLI argument handling

use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;

use crate::{
    services::{FileStore, StoreError},
    state::{Button, MAX_DURATION_MINUTES},
    tasks::Policy,
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "i3-timer")]
#[command(about = "A click-driven countdown timer block for status bars")]
#[command(version)]
pub struct Config {
    /// Command to be executed when the alarm fires
    #[arg(long, default_value = "")]
    pub alarm_command: String,

    /// Print debug messages to stderr
    #[arg(long)]
    pub debug: bool,

    /// Colorize the timer by remaining time
    #[arg(long)]
    pub colors: bool,

    /// Start the timer automatically
    #[arg(long)]
    pub autostart: bool,

    /// Re-start the timer after the alarm
    #[arg(long)]
    pub recurrent: bool,

    /// Default duration in minutes
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(..=MAX_DURATION_MINUTES))]
    pub duration: u32,

    /// Timer state file [default: $HOME/.i3-timer.json]
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Clicked mouse button, as set by the block runner
    #[arg(long, env = "BLOCK_BUTTON", hide_env_values = true)]
    pub button: Option<String>,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on debug flag
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }

    pub fn default_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration))
    }

    pub fn policy(&self) -> Policy {
        Policy {
            autostart: self.autostart,
            recurrent: self.recurrent,
        }
    }

    /// The clicked button, `None` for no or an unknown click
    pub fn button(&self) -> Option<Button> {
        Button::from_signal(self.button.as_deref())
    }

    /// Store for the configured or default state location
    pub fn store(&self) -> Result<FileStore, StoreError> {
        match &self.state_file {
            Some(path) => Ok(FileStore::new(path)),
            None => FileStore::in_home(),
        }
    }
}
