//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Log in, count, and browse the user directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch the user directory and print it as a table
    Users {
        /// Override the users endpoint from config
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },
    /// Probe connectivity and print Online or Offline
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        // default to the interactive UI
        None => {
            let config = load_config()?;
            let _guard = logging::init_file(&config).context("init file logging")?;
            commands::tui::run(&config).await
        }

        Some(Commands::Users { url }) => {
            let config = load_config()?;
            logging::init_stderr(&config);
            commands::users::run(&config, url).await
        }
        Some(Commands::Status) => {
            let config = load_config()?;
            logging::init_stderr(&config);
            commands::status::run(&config).await
        }

        // Config commands skip loading so a broken file can still be located.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load_config() -> Result<config::Config> {
    config::Config::load().context("load config")
}
