//! Tests for the context command

use crate::common::{create_test_services, TestDocs};
use studyrag::cli::commands::context::{execute, ContextArgs};
use studyrag::cli::OutputFormat;

#[tokio::test]
async fn test_context_human() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = ContextArgs {
        query: "how do cells divide".to_string(),
        files: docs.files.clone(),
        limit: Some(2),
        max_chars: None,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Context should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_context_with_budget_json() {
    let docs = TestDocs::lectures();
    let services = create_test_services();

    let args = ContextArgs {
        query: "respiration".to_string(),
        files: docs.files.clone(),
        limit: None,
        max_chars: Some(64),
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Context should succeed: {:?}", result.err());
}
