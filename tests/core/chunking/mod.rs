//! Chunking layer tests
//!
//! Window coverage and termination properties, multi-byte text, and
//! loading documents from disk.

mod test_multibyte;
mod test_pipeline;
