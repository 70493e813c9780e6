//! Multi-document passage retrieval.
//!
//! Chunks a set of documents, ranks every chunk against a query and
//! returns the top passages with their source document and score.

use crate::core::chunking::DocumentPipeline;
use crate::core::error::{RagError, Result};
use crate::core::search::query::{validate_query_length, QueryTerms};
use crate::core::search::selector::rank;
use crate::core::types::{
    Document, RetrievalRequest, RetrievalResponse, RetrievalResult, Scored, SourcedChunk,
};
use std::sync::Arc;
use std::time::Instant;

/// Keyword retrieval service
pub struct Retriever {
    pipeline: Arc<DocumentPipeline>,
    default_chunks: usize,
    max_k: usize,
    max_query_length: usize,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(
        pipeline: Arc<DocumentPipeline>,
        default_chunks: usize,
        max_k: usize,
        max_query_length: usize,
    ) -> Self {
        Self {
            pipeline,
            default_chunks,
            max_k,
            max_query_length,
        }
    }

    /// Execute a retrieval request
    pub fn retrieve(&self, request: RetrievalRequest) -> Result<RetrievalResponse> {
        self.retrieve_documents(&request.query, &request.documents, request.max_chunks)
    }

    /// Execute retrieval with explicit parameters
    pub fn retrieve_documents(
        &self,
        query: &str,
        documents: &[Document],
        max_chunks: Option<usize>,
    ) -> Result<RetrievalResponse> {
        let start = Instant::now();

        let limit = self.resolve_limit(max_chunks)?;
        validate_query_length(query, self.max_query_length)?;

        if documents.is_empty() {
            return Err(RagError::NoDocuments);
        }

        let (chunks, stats) = self.pipeline.chunk_documents(documents);

        let ranked = self.rank_chunks(query, &chunks);
        let results = ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, scored)| to_result(i, scored))
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "Retrieved passages for {:?}: {} chunks from {} documents in {}ms",
            query,
            stats.chunks_created,
            documents.len(),
            duration_ms
        );

        Ok(RetrievalResponse {
            query: query.to_string(),
            results,
            documents: documents.len(),
            chunks_scanned: stats.chunks_created,
            duration_ms,
        })
    }

    /// Rank already-chunked passages. Ties keep document order, then
    /// chunk order.
    pub fn rank_chunks(&self, query: &str, chunks: &[SourcedChunk]) -> Vec<Scored<SourcedChunk>> {
        rank(&QueryTerms::parse(query), chunks)
    }

    /// Determine k (result limit)
    fn resolve_limit(&self, max_chunks: Option<usize>) -> Result<usize> {
        match max_chunks {
            Some(0) => Err(RagError::InvalidArgument(
                "max_chunks must be > 0".to_string(),
            )),
            Some(k) => Ok(k.min(self.max_k)),
            None => Ok(self.default_chunks.min(self.max_k)),
        }
    }
}

fn to_result(position: usize, scored: Scored<SourcedChunk>) -> RetrievalResult {
    RetrievalResult {
        rank: position + 1,
        source: scored.item.source,
        score: scored.score,
        chunk: scored.item.chunk,
    }
}
