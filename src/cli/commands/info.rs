//! Info command - show version and environment information

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Version information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub config_dir: String,
    pub config_file: String,
    pub default_chunk_size: usize,
    pub default_overlap: usize,
    pub default_max_chunks: usize,
}

/// Execute the info command
pub async fn execute(
    _args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let info = InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        config_dir: xdg.config_dir.to_string_lossy().into_owned(),
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        default_chunk_size: services.config.chunking.chunk_size,
        default_overlap: services.config.chunking.overlap,
        default_max_chunks: services.config.retrieval.max_chunks,
    };

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Config: {}", info.config_file);
            println!(
                "Chunking: {} chars, {} overlap",
                info.default_chunk_size, info.default_overlap
            );
            println!("Passages per query: {}", info.default_max_chunks);
        }
        OutputFormat::Json => {
            output::print_json(&info)?;
        }
    }

    Ok(())
}
