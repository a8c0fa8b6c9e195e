//! Command-line interface definitions.
//!
//! Defines the CLI structure for scorewatch using `clap`: run one check,
//! serve the HTTP trigger, inspect stored history, or validate a config file.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Watch a team's live game status and post changes to a chat channel
#[derive(Parser, Debug)]
#[command(name = "scorewatch")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the configured log level (e.g. debug, warn)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one check cycle and exit
    Check(CheckArgs),

    /// Serve the HTTP trigger (GET /poll)
    Serve(ServeArgs),

    /// Show stored observations, newest first
    History(HistoryArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Check(_) => "check",
            Self::Serve(_) => "serve",
            Self::History(_) => "history",
            Self::Config(ConfigCommand::Validate) => "config validate",
        }
    }
}

/// Arguments for `scorewatch check`.
#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    /// Log notifications and keep observations in memory
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `scorewatch serve`.
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Listen address, overriding `server.bind`
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Log notifications and keep observations in memory
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `scorewatch history`.
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}

/// Subcommands for `scorewatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load and validate the configuration file, environment included
    Validate,
}
