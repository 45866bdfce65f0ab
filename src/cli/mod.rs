//! CLI adapter for Tandem
//!
//! Provides the command-line interface over the search core. This
//! module is the only adapter in the crate; it depends on `core/` and
//! nothing in `core/` depends on it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |      core/       |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Tandem - Unified Library Search
///
/// Search a shared library of media, notes, and places with one query
/// box: type tags (@movie), field filters (status:watching, rating>4),
/// exact phrases, OR groups, and exclusions (-spoiler).
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(version)]
#[command(about = "Unified fuzzy search across a shared tracking library", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the library with the unified query syntax
    Search(commands::SearchArgs),

    /// Show how a query string is parsed, without running it
    Explain(commands::ExplainArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  tandem completions bash > ~/.local/share/bash-completion/completions/tandem
    ///   zsh:   tandem completions zsh > ~/.zfunc/_tandem
    ///   fish:  tandem completions fish > ~/.config/fish/completions/tandem.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<()> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::Explain(args) => commands::explain::execute(args, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
