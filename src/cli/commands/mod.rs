//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod chunk;
pub mod completions;
pub mod config;
pub mod context;
pub mod info;
pub mod input;
pub mod score;
pub mod search;

// Re-export argument types for use in mod.rs
pub use chunk::ChunkArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use context::ContextArgs;
pub use info::InfoArgs;
pub use score::ScoreArgs;
pub use search::SearchArgs;
