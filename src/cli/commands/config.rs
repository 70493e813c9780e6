//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was read from, if any
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: services
            .config_path
            .clone()
            .or_else(|| Config::resolved_path(&xdg))
            .map(|p| p.to_string_lossy().into_owned()),
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            output::print_header("Configuration:");
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(defaults)")
            );
            println!("  chunking:");
            println!("    chunk_size: {}", config.chunking.chunk_size);
            println!("    overlap: {}", config.chunking.overlap);
            println!("    max_file_size_mb: {}", config.chunking.max_file_size_mb);
            println!("  retrieval:");
            println!("    max_chunks: {}", config.retrieval.max_chunks);
            println!("    max_k: {}", config.retrieval.max_k);
            println!("    max_query_length: {}", config.retrieval.max_query_length);
            println!("  context:");
            println!("    max_chars: {}", config.context.max_chars);
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
