//! Search command - find the passages most relevant to a query

use crate::cli::commands::input::read_documents;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Question or keywords to look for
    pub query: String,

    /// Documents to search ("-" reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Maximum number of passages (defaults to configured value)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show document names and offsets (no content)
    #[arg(long)]
    pub files_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub document: String,
    pub score: usize,
    pub chunk_index: usize,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub documents: usize,
    pub chunks_scanned: usize,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = read_documents(&args.files, &services.pipeline).await?;

    let response = services
        .retriever
        .retrieve_documents(&args.query, &documents, args.limit)?;

    let output = SearchResponseOutput {
        query: response.query,
        documents: response.documents,
        chunks_scanned: response.chunks_scanned,
        total_results: response.results.len(),
        duration_ms: response.duration_ms,
        results: response
            .results
            .into_iter()
            .map(|r| SearchResultItem {
                rank: r.rank,
                document: r.source,
                score: r.score,
                chunk_index: r.chunk.index,
                start: r.chunk.start,
                end: r.chunk.end,
                text: if args.files_only {
                    None
                } else {
                    Some(r.chunk.text)
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No passages found for '{}'",
                    colors::label(&output.query)
                );
            } else {
                println!(
                    "Top {} of {} chunk(s) across {} document(s) in {}:\n",
                    colors::number(&output.total_results.to_string()),
                    colors::number(&output.chunks_scanned.to_string()),
                    colors::number(&output.documents.to_string()),
                    output::format_duration(output.duration_ms as f64 / 1000.0)
                );

                for result in &output.results {
                    if args.files_only {
                        println!(
                            "{} {}",
                            colors::source(&result.document),
                            colors::dim(&format!("chars {}-{}", result.start, result.end))
                        );
                        continue;
                    }

                    println!(
                        "[{}] {} {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::source(&result.document),
                        colors::dim(&format!("chunk {}", result.chunk_index)),
                        colors::score(&format!("(score: {})", result.score))
                    );
                    if let Some(text) = &result.text {
                        for line in output::preview_lines(text, 5, 100) {
                            println!("    {}", colors::dim(&line));
                        }
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            output::print_json(&output)?;
        }
    }

    Ok(())
}
