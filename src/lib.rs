//! studyrag - passage retrieval for document-grounded study assistants
//!
//! Splits uploaded documents into overlapping character windows,
//! scores each window by how often a question's keywords occur in it,
//! and hands back the few most relevant passages so only they need to
//! be sent to a language model.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - chunking (overlapping windows, document loading)
//!   - search (keyword scoring, top-K selection, retrieval)
//!   - context (labelled prompt context)
//!   - config, error, types, xdg, services
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use studyrag::{calculate_relevance, chunk_text, find_relevant_chunks};
//!
//! let chunks = chunk_text("the cat sat. a dog ran. the cat slept.", 12, 2).unwrap();
//! let best = find_relevant_chunks("cat", &chunks, 1);
//!
//! assert_eq!(best.len(), 1);
//! assert!(calculate_relevance("cat", &best[0].text) >= 1);
//! ```

pub mod cli;
pub mod core;

pub use core::chunking::{chunk_text, Chunker, DocumentPipeline};
pub use core::config::Config;
pub use core::context::ContextBuilder;
pub use core::error::{RagError, Result};
pub use core::search::{calculate_relevance, find_relevant_chunks, ChunkSelector, Retriever};
pub use core::services::Services;
pub use core::types::*;
