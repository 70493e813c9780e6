//! Chunk command - show how documents split into windows

use crate::cli::commands::input::read_documents;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::TextChunk;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Documents to chunk ("-" reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Characters per chunk (defaults to configured value)
    #[arg(long, short = 'c')]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks (defaults to configured value)
    #[arg(long, short = 'o')]
    pub overlap: Option<usize>,

    /// Print chunk text, not only boundaries
    #[arg(long)]
    pub show_text: bool,
}

/// Chunks of one document
#[derive(Debug, Serialize)]
pub struct DocumentChunks {
    pub document: String,
    pub bytes: u64,
    pub chars: usize,
    pub chunks: Vec<TextChunk>,
}

/// Chunk response
#[derive(Debug, Serialize)]
pub struct ChunkResponseOutput {
    pub chunk_size: usize,
    pub overlap: usize,
    pub total_chunks: usize,
    pub documents: Vec<DocumentChunks>,
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config.chunking;
    let chunk_size = args.chunk_size.unwrap_or(config.chunk_size);
    let overlap = args.overlap.unwrap_or(config.overlap);

    let pipeline = services.pipeline.with_chunking(chunk_size, overlap)?;
    let documents = read_documents(&args.files, &pipeline).await?;

    let chunked: Vec<DocumentChunks> = documents
        .iter()
        .map(|doc| DocumentChunks {
            document: doc.name.clone(),
            bytes: doc.content.len() as u64,
            chars: doc.content.chars().count(),
            chunks: pipeline.chunker().chunk_text(&doc.content),
        })
        .collect();

    let output = ChunkResponseOutput {
        chunk_size,
        overlap,
        total_chunks: chunked.iter().map(|d| d.chunks.len()).sum(),
        documents: chunked,
    };

    match format {
        OutputFormat::Human => {
            output::print_header(&format!(
                "Chunking with size {} and overlap {}",
                output.chunk_size, output.overlap
            ));

            for doc in &output.documents {
                println!(
                    "\n{} ({}, {} chars, {} chunks)",
                    colors::source(&doc.document),
                    output::format_bytes(doc.bytes),
                    colors::number(&doc.chars.to_string()),
                    colors::number(&doc.chunks.len().to_string())
                );

                for chunk in &doc.chunks {
                    println!(
                        "  [{}] {}",
                        colors::rank(&chunk.index.to_string()),
                        colors::dim(&format!("chars {}-{}", chunk.start, chunk.end))
                    );
                    if args.show_text {
                        for line in output::preview_lines(&chunk.text, 5, 100) {
                            println!("      {}", colors::dim(&line));
                        }
                    }
                }
            }

            println!();
            output::print_success(&format!(
                "{} chunks from {} document(s)",
                output.total_chunks,
                output.documents.len()
            ));
        }
        OutputFormat::Json => {
            output::print_json(&output)?;
        }
    }

    Ok(())
}
