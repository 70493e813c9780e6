//! CLI adapter for studyrag
//!
//! Exposes chunking, scoring and passage retrieval over local text
//! files. Every command reads documents, runs them through `core/`
//! and prints the result as human-readable text or JSON.

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// studyrag - find the passages of your documents that answer a question
///
/// Splits documents into overlapping windows, scores every window by
/// how often the question's keywords appear in it, and prints the
/// best passages or a ready-to-paste prompt context.
#[derive(Parser, Debug)]
#[command(name = "studyrag")]
#[command(version)]
#[command(about = "Keyword passage retrieval for study documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (overrides the XDG lookup)
    #[arg(long, global = true, env = "STUDYRAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split documents into overlapping chunks
    Chunk(commands::ChunkArgs),

    /// Score every chunk against a query
    Score(commands::ScoreArgs),

    /// Show the passages most relevant to a query
    Search(commands::SearchArgs),

    /// Assemble the most relevant passages into prompt context
    Context(commands::ContextArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version information
    #[command(name = "get-info")]
    GetInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  studyrag completions bash > ~/.local/share/bash-completion/completions/studyrag
    ///   zsh:   studyrag completions zsh > ~/.zfunc/_studyrag
    ///   fish:  studyrag completions fish > ~/.config/fish/completions/studyrag.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg, cli.config.as_deref())?;
    config.log_config();

    let services = Arc::new(Services::new(config)?.with_config_path(cli.config));

    match cli.command {
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::Score(args) => commands::score::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Context(args) => commands::context::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
