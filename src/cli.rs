//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Consolidate - Merge sources and their local includes into one file
#[derive(Parser, Debug)]
#[command(name = "consolidate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge root files and their local includes into one artifact
    Merge(commands::merge::MergeArgs),

    /// Display the include graph as a tree
    Tree(commands::tree::TreeArgs),

    /// Validate consolidation inputs and check the graph for cycles
    Validate(commands::validate::ValidateArgs),

    /// Initialize a new .consolidate.yaml manifest
    Init(commands::init::InitArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Merge(args) => commands::merge::execute(args, &self.color),
            Commands::Tree(args) => commands::tree::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Init(args) => commands::init::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize env_logger honoring the --log-level flag.
///
/// Scan diagnostics (missing includes, malformed directives) are reported
/// through `log::warn`, so the default level keeps them visible.
/// RUST_LOG, when set, takes precedence over the flag.
fn init_logging(log_level: &str) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        let level = log_level.parse().unwrap_or(log::LevelFilter::Info);
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
