//! i3-timer - A click-driven countdown timer block for status bars
//! 
//! This is the main entry point for the i3-timer binary.

use anyhow::Context;
use tracing::debug;

use i3_timer::{config::Config, services::CommandAlarm, tasks::Invocation, utils::clock};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // stdout belongs to the status bar, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(format!("i3_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let store = config.store().context("Failed to locate timer state")?;
    let mut alarm = CommandAlarm::new(config.alarm_command.clone());

    let invocation = Invocation {
        button: config.button(),
        now: clock::now(),
        policy: config.policy(),
        default_duration: config.default_duration(),
        colors: config.colors,
    };
    debug!(
        "Invocation: button={:?} state={}",
        invocation.button,
        store.path().display()
    );

    let line = invocation
        .run(&store, &mut alarm)
        .context("Failed to update timer")?;
    println!("{}", line);
    Ok(())
}
