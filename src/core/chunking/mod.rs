//! Document chunking module.
//!
//! Handles splitting documents into overlapping windows before they
//! are ranked against a query. Key features:
//!
//! - UTF-8 safe character-based chunking
//! - Configurable chunk size and overlap
//! - Guaranteed termination for any overlap
//! - Loading documents from disk with a size limit

pub mod chunker;
pub mod pipeline;

pub use chunker::{chunk_text, Chunker, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use pipeline::{document_name, max_file_size_bytes, DocumentPipeline};
