//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use conecta_core::config::{Config, paths};

mod commands;

#[derive(Parser)]
#[command(name = "conecta")]
#[command(version)]
#[command(about = "Conecta event-management client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in to the backend and persist the session cookie
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the backend session and clear the stored cookie
    Logout,
    /// Register a new account
    Register(commands::auth::RegisterArgs),
    /// Show or edit your profile
    #[command(subcommand)]
    Profile(commands::profile::ProfileCommand),
    /// Browse, create, join, and delete events
    #[command(subcommand)]
    Events(commands::events::EventsCommand),
    /// Configuration helpers
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let _log_guard = init_tracing(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        match cli.command {
            Commands::Login { email, password } => {
                commands::auth::login(&config, &email, &password).await
            }
            Commands::Logout => commands::auth::logout(&config).await,
            Commands::Register(args) => commands::auth::register(&config, args).await,
            Commands::Profile(command) => commands::profile::run(&config, command).await,
            Commands::Events(command) => commands::events::run(&config, command).await,
            Commands::Config(command) => commands::config::run(&command),
        }
    })
}

/// File logging under ${CONECTA_HOME}/logs. The CONECTA_LOG env var
/// overrides the configured filter.
fn init_tracing(config: &Config) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, "conecta.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_env("CONECTA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
