//! Search module for keyword passage retrieval.
//!
//! This module scores chunks by counting query-term occurrences and
//! selects the most relevant ones, for a single document or across
//! many.

mod query;
mod relevance;
mod retriever;
mod selector;

pub use query::{is_term_separator, validate_query_length, QueryTerms, MIN_TERM_CHARS};
pub use relevance::calculate_relevance;
pub use retriever::Retriever;
pub use selector::{find_relevant_chunks, rank, ChunkSelector, Scorable, DEFAULT_MAX_CHUNKS};
