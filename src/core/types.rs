//! Core data types for studyrag.
//!
//! This module defines the data structures shared by the chunker,
//! the scorer and the retrieval service, including the request and
//! response shapes the CLI serializes.

use serde::{Deserialize, Serialize};

/// A contiguous slice of a larger text plus its position.
///
/// `start` and `end` are character offsets (Unicode scalar values),
/// so `end - start` is the number of characters in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// The chunk content
    pub text: String,

    /// Zero-based position among the chunks of the same source text
    pub index: usize,

    /// Offset of the first character (inclusive)
    pub start: usize,

    /// Offset past the last character (exclusive)
    pub end: usize,
}

impl TextChunk {
    /// Number of characters covered by this chunk
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// An uploaded document: a display name and its full text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A chunk tagged with the name of the document it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedChunk {
    pub source: String,
    pub chunk: TextChunk,
}

/// An item paired with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scored<T> {
    pub item: T,
    pub score: usize,
}

/// Statistics from loading documents off disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Documents read successfully
    pub documents_loaded: usize,

    /// Files that could not be read (missing, too large, not UTF-8)
    pub documents_skipped: usize,

    /// Total bytes read
    pub bytes_read: u64,
}

/// Statistics from chunking a set of documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Documents that produced at least one chunk
    pub documents_chunked: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Total characters across all documents
    pub total_chars: usize,
}

/// Request to retrieve the passages most relevant to a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalRequest {
    /// Free-text question or keywords
    pub query: String,

    /// Documents to search, in caller order
    pub documents: Vec<Document>,

    /// Number of chunks to return (optional)
    pub max_chunks: Option<usize>,
}

/// A single ranked passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// 1-based rank
    pub rank: usize,

    /// Document name
    pub source: String,

    /// Keyword relevance score (higher = more relevant)
    pub score: usize,

    pub chunk: TextChunk,
}

/// Response from a retrieval operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResponse {
    /// Original query string
    pub query: String,

    /// Ranked passages
    pub results: Vec<RetrievalResult>,

    /// Number of documents searched
    pub documents: usize,

    /// Number of chunks scored
    pub chunks_scanned: usize,

    /// Retrieval duration in milliseconds
    pub duration_ms: u64,
}
