use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use showroom::{
    cli::commands::{
        export::ExportCommand, resolve_config, search::SearchCommand, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    Result,
};

/// Initialize tracing with CLI flags
///
/// `RUST_LOG` wins over `--log-level` when set. Logs go to `--log-file`
/// when given; otherwise to stderr, except for interactive commands where
/// they are discarded so the terminal UI stays intact.
fn initialize_tracing(log_level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr) // Critical: logs to stderr, not stdout
            .init();
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    initialize_tracing(
        cli.log_level,
        cli.log_file.as_deref(),
        cli.command.is_interactive(),
    )?;

    let config = resolve_config(cli.config.as_deref(), cli.source.as_deref())?;
    tracing::debug!("Running '{}' against {}", cli.command.name(), config.source);

    match cli.command {
        #[cfg(feature = "tui")]
        Commands::Browse => {
            let command = showroom::cli::commands::browse::BrowseCommand::new(config);
            command.execute().await?;
        }
        Commands::Search { query, json } => {
            let command = SearchCommand::new(config, query, json);
            command.execute().await?;
        }
        Commands::Export {
            output,
            query,
            title,
        } => {
            let command = ExportCommand::new(config, output, query, title);
            command.execute().await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
