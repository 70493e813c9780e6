//! Core domain logic (protocol-agnostic)
//!
//! This module contains all chunking and ranking logic, independent
//! of how it is invoked.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **chunking**: Overlapping window chunker and document loading
//! - **search**: Keyword relevance scoring and top-K selection
//! - **context**: Labelled reference context assembly
//! - **services**: Unified service container

pub mod chunking;
pub mod config;
pub mod context;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

pub use config::Config;
pub use error::{RagError, Result};
pub use services::Services;
