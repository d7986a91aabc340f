//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use relay_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "relay")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the results server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without the TUI
    Login {
        /// Username to submit
        #[arg(short, long)]
        username: String,

        /// Password to submit
        #[arg(short, long)]
        password: String,

        /// Remember the credentials for next time
        #[arg(long)]
        remember: bool,
    },

    /// Forget the stored login
    Logout,

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
    // Keep the log writer alive for the whole process
    let _log_guard = relay_core::logging::init().context("init logging")?;

    // The config only matters where the server URL does; a malformed
    // config.toml must not break logout or the config subcommands.

    // default to the interactive login flow
    let Some(command) = cli.command else {
        #[cfg(feature = "tui")]
        {
            let config = config::Config::load().context("load config")?;
            return relay_tui::run_interactive(&config).await;
        }

        #[cfg(not(feature = "tui"))]
        anyhow::bail!("Built without the TUI. Use `relay login` instead.");
    };

    match command {
        Commands::Login {
            username,
            password,
            remember,
        } => {
            let config = config::Config::load().context("load config")?;
            commands::auth::login(&config, &username, &password, remember).await
        }

        Commands::Logout => commands::auth::logout(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
