//! Score command - rank every chunk against a query

use crate::cli::commands::input::read_documents;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::validate_query_length;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the score command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Question or keywords to score against
    pub query: String,

    /// Documents to score ("-" reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Hide chunks that scored 0
    #[arg(long)]
    pub nonzero: bool,
}

/// One scored chunk
#[derive(Debug, Serialize)]
pub struct ScoreItem {
    pub document: String,
    pub chunk_index: usize,
    pub start: usize,
    pub end: usize,
    pub score: usize,
}

/// Score response
#[derive(Debug, Serialize)]
pub struct ScoreResponseOutput {
    pub query: String,
    pub chunks_scanned: usize,
    pub matching_chunks: usize,
    pub scores: Vec<ScoreItem>,
}

/// Execute the score command
pub async fn execute(
    args: ScoreArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_query_length(&args.query, services.config.retrieval.max_query_length)?;

    let documents = read_documents(&args.files, &services.pipeline).await?;
    let (chunks, stats) = services.pipeline.chunk_documents(&documents);
    let ranked = services.retriever.rank_chunks(&args.query, &chunks);

    let matching_chunks = ranked.iter().filter(|s| s.score > 0).count();
    let output = ScoreResponseOutput {
        query: args.query.clone(),
        chunks_scanned: stats.chunks_created,
        matching_chunks,
        scores: ranked
            .into_iter()
            .filter(|s| !args.nonzero || s.score > 0)
            .map(|s| ScoreItem {
                document: s.item.source,
                chunk_index: s.item.chunk.index,
                start: s.item.chunk.start,
                end: s.item.chunk.end,
                score: s.score,
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} of {} chunk(s) match '{}'\n",
                colors::number(&output.matching_chunks.to_string()),
                colors::number(&output.chunks_scanned.to_string()),
                colors::label(&output.query)
            );
            for item in &output.scores {
                println!(
                    "{:>6}  {} {}",
                    colors::score(&item.score.to_string()),
                    colors::source(&item.document),
                    colors::dim(&format!(
                        "chunk {} (chars {}-{})",
                        item.chunk_index, item.start, item.end
                    ))
                );
            }
        }
        OutputFormat::Json => {
            output::print_json(&output)?;
        }
    }

    Ok(())
}
