//! Document pipeline orchestration.
//!
//! Coordinates the steps between a set of files on disk and a flat
//! list of chunks ready to be ranked:
//! 1. Read file contents (size limit, UTF-8 only)
//! 2. Chunk each document independently
//! 3. Tag chunks with their document name

use std::fs;
use std::path::Path;

use crate::core::chunking::Chunker;
use crate::core::error::{RagError, Result};
use crate::core::types::{ChunkStats, Document, LoadStats, SourcedChunk};

/// Loads and chunks documents
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    chunker: Chunker,
    max_file_size_bytes: u64,
}

impl DocumentPipeline {
    /// Create a new document pipeline
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Size of chunks in characters
    /// * `overlap` - Overlap between chunks in characters
    /// * `max_file_size_mb` - Maximum document size in megabytes
    pub fn new(chunk_size: usize, overlap: usize, max_file_size_mb: usize) -> Result<Self> {
        let chunker = Chunker::new(chunk_size, overlap)?;
        let max_file_size_bytes = max_file_size_bytes(max_file_size_mb).ok_or_else(|| {
            RagError::InvalidArgument(format!(
                "max_file_size_mb of {max_file_size_mb} does not fit in a byte count"
            ))
        })?;

        Ok(Self {
            chunker,
            max_file_size_bytes,
        })
    }

    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Copy of this pipeline with a different window size and overlap
    pub fn with_chunking(&self, chunk_size: usize, overlap: usize) -> Result<Self> {
        Ok(Self {
            chunker: Chunker::new(chunk_size, overlap)?,
            max_file_size_bytes: self.max_file_size_bytes,
        })
    }

    /// Check that a document of `size` bytes is within the limit
    pub fn check_size(&self, name: &str, size: u64) -> Result<()> {
        if size > self.max_file_size_bytes {
            return Err(RagError::DocumentError(format!(
                "{name} is {size} bytes, limit is {} bytes",
                self.max_file_size_bytes
            )));
        }
        Ok(())
    }

    /// Turn raw bytes into a document, rejecting non-UTF-8 content
    pub fn document_from_bytes(&self, name: &str, bytes: Vec<u8>) -> Result<Document> {
        self.check_size(name, bytes.len() as u64)?;

        let content = String::from_utf8(bytes)
            .map_err(|_| RagError::DocumentError(format!("Skipping non-UTF-8 file: {name}")))?;

        Ok(Document::new(name, content))
    }

    /// Read a single file into a document
    pub fn load_file(&self, path: &Path) -> Result<Document> {
        let metadata = fs::metadata(path)
            .map_err(|e| RagError::DocumentError(format!("Failed to read {path:?}: {e}")))?;
        self.check_size(&document_name(path), metadata.len())?;

        let bytes = fs::read(path)
            .map_err(|e| RagError::DocumentError(format!("Failed to read {path:?}: {e}")))?;

        self.document_from_bytes(&document_name(path), bytes)
    }

    /// Read many files. Errors reading individual files are logged
    /// and counted but don't stop the process.
    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> (Vec<Document>, LoadStats) {
        let mut documents = Vec::with_capacity(paths.len());
        let mut stats = LoadStats::default();

        for path in paths {
            let path = path.as_ref();
            match self.load_file(path) {
                Ok(doc) => {
                    stats.bytes_read += doc.content.len() as u64;
                    stats.documents_loaded += 1;
                    documents.push(doc);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                    stats.documents_skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} documents ({} skipped, {} bytes)",
            stats.documents_loaded,
            stats.documents_skipped,
            stats.bytes_read
        );

        (documents, stats)
    }

    /// Chunk every document. Chunk indices restart at 0 per document.
    pub fn chunk_documents(&self, documents: &[Document]) -> (Vec<SourcedChunk>, ChunkStats) {
        let mut all_chunks = Vec::new();
        let mut stats = ChunkStats::default();

        for doc in documents {
            stats.total_chars += doc.content.chars().count();

            if doc.content.is_empty() {
                tracing::debug!("Skipping empty document: {}", doc.name);
                continue;
            }

            let chunks = self.chunker.chunk_text(&doc.content);
            tracing::debug!("Chunked {} ({} chunks)", doc.name, chunks.len());

            stats.documents_chunked += 1;
            all_chunks.extend(chunks.into_iter().map(|chunk| SourcedChunk {
                source: doc.name.clone(),
                chunk,
            }));
        }

        stats.chunks_created = all_chunks.len();
        (all_chunks, stats)
    }
}

/// Size limit in bytes for `max_file_size_mb`, or `None` on overflow
pub fn max_file_size_bytes(max_file_size_mb: usize) -> Option<u64> {
    u64::try_from(max_file_size_mb)
        .ok()?
        .checked_mul(1024 * 1024)
}

/// Display name for a document loaded from `path`
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
