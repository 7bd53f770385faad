//! Interactive UI command handler.

use anyhow::{Context, Result};
use roster_core::config::Config;

use crate::modes;

pub async fn run(config: &Config) -> Result<()> {
    modes::run_interactive(config)
        .await
        .context("interactive session failed")
}
