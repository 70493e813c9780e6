//! Top-K chunk selection.
//!
//! Every candidate is scored once, then a single stable sort orders
//! them by descending score. Candidates with equal scores keep their
//! input order, so when nothing matches the selection falls back to
//! the first K chunks in document order.

use crate::core::error::{RagError, Result};
use crate::core::search::query::QueryTerms;
use crate::core::types::{Scored, SourcedChunk, TextChunk};

/// Default number of chunks returned by a selection
pub const DEFAULT_MAX_CHUNKS: usize = 3;

/// Anything that exposes chunk text to the scorer
pub trait Scorable {
    fn scorable_text(&self) -> &str;
}

impl Scorable for TextChunk {
    fn scorable_text(&self) -> &str {
        &self.text
    }
}

impl Scorable for SourcedChunk {
    fn scorable_text(&self) -> &str {
        &self.chunk.text
    }
}

/// Score every item and sort by descending score, preserving input
/// order among equal scores.
pub fn rank<T: Scorable + Clone>(terms: &QueryTerms, items: &[T]) -> Vec<Scored<T>> {
    let mut scored: Vec<Scored<T>> = items
        .iter()
        .map(|item| Scored {
            score: terms.score(item.scorable_text()),
            item: item.clone(),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Selects the chunks most relevant to a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSelector {
    max_chunks: usize,
}

impl ChunkSelector {
    /// # Errors
    ///
    /// Returns [`RagError::InvalidArgument`] if `max_chunks` is 0.
    pub fn new(max_chunks: usize) -> Result<Self> {
        if max_chunks == 0 {
            return Err(RagError::InvalidArgument(
                "max_chunks must be > 0".to_string(),
            ));
        }
        Ok(Self { max_chunks })
    }

    pub fn max_chunks(&self) -> usize {
        self.max_chunks
    }

    /// All items with their scores, most relevant first
    pub fn rank<T: Scorable + Clone>(&self, query: &str, items: &[T]) -> Vec<Scored<T>> {
        rank(&QueryTerms::parse(query), items)
    }

    /// The top `max_chunks` items with their scores
    pub fn select_scored<T: Scorable + Clone>(&self, query: &str, items: &[T]) -> Vec<Scored<T>> {
        let mut ranked = self.rank(query, items);
        ranked.truncate(self.max_chunks);
        ranked
    }

    /// The top `max_chunks` items, scores dropped
    pub fn select<T: Scorable + Clone>(&self, query: &str, items: &[T]) -> Vec<T> {
        self.select_scored(query, items)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }
}

impl Default for ChunkSelector {
    fn default() -> Self {
        Self {
            max_chunks: DEFAULT_MAX_CHUNKS,
        }
    }
}

/// Return up to `max_chunks` chunks ordered by descending relevance
/// to `query`. Ties keep their order in `chunks`. A `max_chunks` of 0
/// returns nothing.
pub fn find_relevant_chunks(query: &str, chunks: &[TextChunk], max_chunks: usize) -> Vec<TextChunk> {
    let terms = QueryTerms::parse(query);
    rank(&terms, chunks)
        .into_iter()
        .take(max_chunks)
        .map(|scored| scored.item)
        .collect()
}
