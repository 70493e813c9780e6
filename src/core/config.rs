//! Configuration management for studyrag.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::chunking::max_file_size_bytes;
use crate::core::error::{RagError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub context: ContextConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters each chunk re-includes from the previous one
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Maximum document size in MB (larger files are rejected)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Retrieval configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    /// Number of chunks returned when the caller does not ask for more
    #[serde(default = "default_max_chunks")]
    pub max_chunks: usize,

    /// Upper bound on chunks per request
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Context assembly configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextConfig {
    /// Character budget for assembled context (0 = unlimited)
    #[serde(default)]
    pub max_chars: usize,
}

fn default_chunk_size() -> usize {
    5000
}

fn default_overlap() -> usize {
    200
}

fn default_max_file_size() -> usize {
    10
}

fn default_max_chunks() -> usize {
    3
}

fn default_max_k() -> usize {
    50
}

fn default_max_query_length() -> usize {
    500
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_chunks: default_max_chunks(),
            max_k: default_max_k(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RagError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg, None)
    }

    /// Load config, preferring an explicit file when one is given
    ///
    /// File priority order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. STUDYRAG_CONFIG env var
    /// 3. XDG config file (~/.config/studyrag/config.toml)
    /// 4. ./studyrag.toml
    /// 5. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs, explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("STUDYRAG_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("studyrag.toml").exists() {
                Self::from_file("studyrag.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Path of the file `load` would read, if any
    pub fn resolved_path(xdg: &XdgDirs) -> Option<PathBuf> {
        if let Ok(config_path) = env::var("STUDYRAG_CONFIG") {
            return Some(PathBuf::from(config_path));
        }
        let xdg_config = xdg.config_file();
        if xdg_config.exists() {
            return Some(xdg_config);
        }
        let local = PathBuf::from("studyrag.toml");
        local.exists().then_some(local)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        fn parse_var(name: &str) -> Option<usize> {
            env::var(name).ok().and_then(|v| v.parse().ok())
        }

        if let Some(size) = parse_var("STUDYRAG_CHUNK_SIZE") {
            self.chunking.chunk_size = size;
        }
        if let Some(overlap) = parse_var("STUDYRAG_OVERLAP") {
            self.chunking.overlap = overlap;
        }
        if let Some(size) = parse_var("STUDYRAG_MAX_FILE_SIZE_MB") {
            self.chunking.max_file_size_mb = size;
        }

        if let Some(n) = parse_var("STUDYRAG_MAX_CHUNKS") {
            self.retrieval.max_chunks = n;
        }
        if let Some(k) = parse_var("STUDYRAG_MAX_K") {
            self.retrieval.max_k = k;
        }
        if let Some(len) = parse_var("STUDYRAG_MAX_QUERY_LENGTH") {
            self.retrieval.max_query_length = len;
        }

        if let Some(chars) = parse_var("STUDYRAG_CONTEXT_MAX_CHARS") {
            self.context.max_chars = chars;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(RagError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.chunking.max_file_size_mb == 0 {
            return Err(RagError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if max_file_size_bytes(self.chunking.max_file_size_mb).is_none() {
            return Err(RagError::ConfigError(format!(
                "Max file size of {} MB is too large",
                self.chunking.max_file_size_mb
            )));
        }

        if self.chunking.overlap >= self.chunking.chunk_size {
            tracing::warn!(
                "Overlap ({}) is not smaller than chunk size ({}); chunks will not overlap",
                self.chunking.overlap,
                self.chunking.chunk_size
            );
        }

        if self.retrieval.max_chunks == 0 {
            return Err(RagError::ConfigError(
                "Max chunks must be non-zero".to_string(),
            ));
        }

        if self.retrieval.max_chunks > self.retrieval.max_k {
            return Err(RagError::ConfigError(
                "Max chunks cannot exceed max k".to_string(),
            ));
        }

        if self.retrieval.max_query_length == 0 {
            return Err(RagError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.chunking.chunk_size);
        tracing::info!("  Overlap: {} chars", self.chunking.overlap);
        tracing::info!("  Max file size: {} MB", self.chunking.max_file_size_mb);
        tracing::info!("  Max chunks: {}", self.retrieval.max_chunks);
        tracing::info!("  Max k: {}", self.retrieval.max_k);
        tracing::info!("  Max query length: {}", self.retrieval.max_query_length);
        tracing::info!("  Context max chars: {}", self.context.max_chars);
    }
}
