//! Tests for the chunk command

use crate::common::{create_test_services, TestDocs};
use studyrag::cli::commands::chunk::{execute, ChunkArgs};
use studyrag::cli::OutputFormat;

#[tokio::test]
async fn test_chunk_with_defaults() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = ChunkArgs {
        files: docs.files.clone(),
        chunk_size: None,
        overlap: None,
        show_text: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Chunk should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_chunk_with_overrides_json() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = ChunkArgs {
        files: docs.files.clone(),
        chunk_size: Some(40),
        overlap: Some(8),
        show_text: true,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Chunk should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_chunk_overlap_not_smaller_than_size() {
    let docs = TestDocs::with_files(&[("notes.txt", "ABCDEFGHIJ")]);
    let services = create_test_services();

    let args = ChunkArgs {
        files: docs.files.clone(),
        chunk_size: Some(3),
        overlap: Some(50),
        show_text: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Chunk should terminate: {:?}", result.err());
}

#[tokio::test]
async fn test_chunk_zero_size_fails() {
    let docs = TestDocs::with_files(&[("notes.txt", "text")]);
    let services = create_test_services();

    let args = ChunkArgs {
        files: docs.files.clone(),
        chunk_size: Some(0),
        overlap: None,
        show_text: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err(), "Zero chunk size should be rejected");
}

#[tokio::test]
async fn test_chunk_missing_files_fails() {
    let docs = TestDocs::with_files(&[]);
    let services = create_test_services();

    let args = ChunkArgs {
        files: vec![docs.path().join("missing.txt")],
        chunk_size: None,
        overlap: None,
        show_text: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err(), "Chunking nothing should fail");
}
