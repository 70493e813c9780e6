//! Context command - assemble retrieved passages into prompt context

use crate::cli::commands::input::read_documents;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the context command
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Question the context should help answer
    pub query: String,

    /// Documents to draw passages from ("-" reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum number of passages (defaults to configured value)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Character budget for the assembled context (0 = unlimited)
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Context response
#[derive(Debug, Serialize)]
pub struct ContextResponseOutput {
    pub query: String,
    pub passages: usize,
    pub chars: usize,
    pub context: String,
}

/// Execute the context command
pub async fn execute(
    args: ContextArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = read_documents(&args.files, &services.pipeline).await?;

    let response = services
        .retriever
        .retrieve_documents(&args.query, &documents, args.limit)?;
    let context = services
        .context_builder(args.max_chars)
        .build(&response.results);

    let output = ContextResponseOutput {
        query: response.query,
        passages: response.results.len(),
        chars: context.chars().count(),
        context,
    };

    match format {
        OutputFormat::Human => {
            // Raw context so it can be piped straight into a prompt
            println!("{}", output.context);
        }
        OutputFormat::Json => {
            output::print_json(&output)?;
        }
    }

    Ok(())
}
