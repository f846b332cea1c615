//! Pong frame renderer (default binary).
//!
//! Renders the initial game state once, writes it as a text grid, and exits.
//! Settings come from `PONG_*` environment variables (see `tui_pong::config`);
//! `RUST_LOG` controls log output.

use anyhow::Result;

use tui_pong::config::RenderConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = RenderConfig::from_env();
    log::debug!("{:?}", config);

    tui_pong::run(&config)?;
    Ok(())
}
