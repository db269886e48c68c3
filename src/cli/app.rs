use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Showroom: browse and search a classic car catalog
#[derive(Parser)]
#[command(name = "showroom")]
#[command(version)]
#[command(about = "Browse and search a classic car catalog")]
#[command(
    long_about = "Showroom loads a JSON catalog of cars, renders each entry as a card and filters the cards by a free-text search over name, history and specifications."
)]
pub struct Cli {
    /// Configuration file (defaults to ./showroom.yaml, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog location, URL or path (overrides the configuration file)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Log verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive card browser
    #[cfg(feature = "tui")]
    Browse,

    /// Print the cards matching a search term
    Search {
        /// Search term; empty shows the whole catalog
        query: Option<String>,

        /// Print matching items as JSON in the catalog format
        #[arg(long)]
        json: bool,
    },

    /// Write the cards to a static HTML page
    Export {
        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        /// Only export cards matching this search term
        #[arg(short, long)]
        query: Option<String>,

        /// Page title (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "tui")]
            Commands::Browse => "browse",
            Commands::Search { .. } => "search",
            Commands::Export { .. } => "export",
        }
    }

    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            #[cfg(feature = "tui")]
            Commands::Browse => true,
            _ => false,
        }
    }
}

/// Log verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_parsing() {
        let cli = Cli::parse_from(["showroom", "search", "mustang", "--json"]);
        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query.as_deref(), Some("mustang"));
                assert!(json);
            }
            _ => panic!("Expected Search command"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "showroom",
            "export",
            "-o",
            "cars.html",
            "--source",
            "https://cars.example.com/data.json",
            "--log-level",
            "debug",
        ]);

        assert_eq!(
            cli.source.as_deref(),
            Some("https://cars.example.com/data.json")
        );
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
        assert_eq!(cli.command.name(), "export");
        assert!(!cli.command.is_interactive());
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["showroom", "export"]).is_err());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_browse_is_interactive() {
        let cli = Cli::parse_from(["showroom", "browse"]);
        assert_eq!(cli.command.name(), "browse");
        assert!(cli.command.is_interactive());
    }
}
