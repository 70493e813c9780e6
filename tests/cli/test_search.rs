//! Tests for the search command

use crate::common::{create_test_services, TestDocs};
use studyrag::cli::commands::search::{execute, SearchArgs};
use studyrag::cli::OutputFormat;

#[tokio::test]
async fn test_search_basic() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = SearchArgs {
        query: "mitochondria energy".to_string(),
        files: docs.files.clone(),
        limit: None,
        files_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_files_only_json() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = SearchArgs {
        query: "cells".to_string(),
        files: docs.files.clone(),
        limit: Some(1),
        files_only: true,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_unicode_query() {
    let docs = TestDocs::with_files(&[
        ("korean.txt", "세포 분열은 세포 주기의 일부이다"),
        ("emoji.txt", "🧬 DNA 🧬 replication"),
    ]);
    let services = create_test_services();

    for query in ["세포", "🧬 dna"] {
        let args = SearchArgs {
            query: query.to_string(),
            files: docs.files.clone(),
            limit: None,
            files_only: false,
        };

        let result = execute(args, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "Search for {query} failed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_search_zero_limit_fails() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = SearchArgs {
        query: "cells".to_string(),
        files: docs.files.clone(),
        limit: Some(0),
        files_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err(), "Zero limit should be rejected");
}
