use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stepboard_console::Console;
use stepboard_game::SessionConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_lookup(|key| std::env::var(key).ok())
        .context("invalid session configuration")?;
    info!(
        placement = %config.initial_placement,
        notation_import = %config.notation_import,
        "stepboard starting"
    );

    let stdin = io::stdin();
    Console::new(config, stdin.lock(), io::stdout().lock()).run()?;
    Ok(())
}
