//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use consulta_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "consulta")]
#[command(version)]
#[command(about = "Browse and book consultation slots from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Register an account without starting the TUI
    Register {
        /// Full name for the new account
        #[arg(long)]
        name: String,

        /// Email address (stored trimmed and lowercased)
        #[arg(long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(long)]
        password: String,
    },

    /// Check credentials without starting the TUI
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

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
    // Config subcommands work without loading the config or logging.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = Config::load().context("load config")?;
    let _log_guard = consulta_core::logging::init(config.log_filter.as_deref())?;
    tracing::info!(accounts = %config.accounts_path().display(), "consulta starting");

    match cli.command {
        None => consulta_tui::run_app(&config).await,
        Some(Commands::Register {
            name,
            email,
            password,
        }) => commands::accounts::register(&config, &name, &email, &password).await,
        Some(Commands::Login { email, password }) => {
            commands::accounts::login(&config, &email, &password).await
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}
