//! Full-screen TUI for Roster.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr, stdout};

use anyhow::Result;
pub use features::{home, login, network};
use roster_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive session until the user quits.
pub async fn run_interactive(config: &Config) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive UI requires a terminal.\n\
             Use `roster users` to print the user list instead."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
