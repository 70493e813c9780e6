//! Unified service container for studyrag
//!
//! Provides shared access to all core services.

use crate::core::chunking::DocumentPipeline;
use crate::core::config::Config;
use crate::core::context::ContextBuilder;
use crate::core::error::Result;
use crate::core::search::{ChunkSelector, Retriever};
use std::path::PathBuf;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Document loading and chunking
    pub pipeline: Arc<DocumentPipeline>,

    /// Multi-document retrieval
    pub retriever: Arc<Retriever>,

    /// Application configuration
    pub config: Arc<Config>,

    /// File the configuration was explicitly loaded from
    pub config_path: Option<PathBuf>,
}

impl Services {
    /// Create services from a configuration already checked by
    /// [`Config::validate`]. Component constructors still reject a zero
    /// chunk size and an unrepresentable file size limit.
    pub fn new(config: Config) -> Result<Self> {
        let pipeline = Arc::new(DocumentPipeline::new(
            config.chunking.chunk_size,
            config.chunking.overlap,
            config.chunking.max_file_size_mb,
        )?);

        let retriever = Arc::new(Retriever::new(
            Arc::clone(&pipeline),
            config.retrieval.max_chunks,
            config.retrieval.max_k,
            config.retrieval.max_query_length,
        ));

        Ok(Self {
            pipeline,
            retriever,
            config: Arc::new(config),
            config_path: None,
        })
    }

    /// Record the file the configuration came from
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Selector using the configured default chunk count
    pub fn selector(&self) -> Result<ChunkSelector> {
        ChunkSelector::new(self.config.retrieval.max_chunks)
    }

    /// Context builder, optionally overriding the configured budget
    pub fn context_builder(&self, max_chars: Option<usize>) -> ContextBuilder {
        ContextBuilder::new(max_chars.unwrap_or(self.config.context.max_chars))
    }
}
