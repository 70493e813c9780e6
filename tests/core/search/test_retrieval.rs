// Multi-document retrieval and context assembly tests

use crate::common::{create_test_services, create_test_services_with, lecture_documents};
use studyrag::core::context::PASSAGE_SEPARATOR;
use studyrag::{ContextBuilder, Document, RagError, RetrievalRequest};

#[test]
fn test_retrieve_best_passage_first() {
    let services = create_test_services();

    let response = services
        .retriever
        .retrieve_documents("mitochondria energy", &lecture_documents(), None)
        .unwrap();

    assert_eq!(response.documents, 3);
    assert_eq!(response.chunks_scanned, 3);
    assert_eq!(response.results.len(), 3);
    assert_eq!(response.results[0].source, "week2-energy.txt");
    assert_eq!(response.results[0].rank, 1);
    assert!(response.results[0].score > response.results[1].score);
}

#[test]
fn test_retrieve_request_struct() {
    let services = create_test_services_with(60, 10, 2);

    let response = services
        .retriever
        .retrieve(RetrievalRequest {
            query: "cells".to_string(),
            documents: lecture_documents(),
            max_chunks: None,
        })
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(response.chunks_scanned > 3);
    let ranks: Vec<usize> = response.results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2]);
}

#[test]
fn test_retrieve_limit_clamped_to_max_k() {
    let services = create_test_services_with(5, 0, 3);
    let doc = Document::new("long.txt", "word ".repeat(200));

    let response = services
        .retriever
        .retrieve_documents("word", &[doc], Some(10_000))
        .unwrap();

    assert_eq!(response.results.len(), services.config.retrieval.max_k);
}

#[test]
fn test_retrieve_errors() {
    let services = create_test_services();
    let docs = lecture_documents();

    let err = services
        .retriever
        .retrieve_documents("cells", &docs, Some(0))
        .unwrap_err();
    assert!(matches!(err, RagError::InvalidArgument(_)));

    let err = services
        .retriever
        .retrieve_documents("cells", &[], None)
        .unwrap_err();
    assert!(err.is_not_found());

    let long_query = "q".repeat(services.config.retrieval.max_query_length + 1);
    let err = services
        .retriever
        .retrieve_documents(&long_query, &docs, None)
        .unwrap_err();
    assert!(matches!(err, RagError::InvalidQuery(_)));
    assert!(err.is_bad_request());
}

#[test]
fn test_context_from_retrieval() {
    let services = create_test_services();
    let response = services
        .retriever
        .retrieve_documents("meiosis gametes", &lecture_documents(), Some(2))
        .unwrap();

    let context = services.context_builder(None).build(&response.results);

    assert!(context.starts_with("[Document: week3-division.txt | chunk 0 | chars 0-"));
    assert_eq!(context.matches(PASSAGE_SEPARATOR).count(), 1);
    assert!(context.contains(&response.results[1].chunk.text));
}

#[test]
fn test_context_budget() {
    let services = create_test_services();
    let response = services
        .retriever
        .retrieve_documents("cells", &lecture_documents(), None)
        .unwrap();

    let unlimited = ContextBuilder::default().build(&response.results);
    let limited = services.context_builder(Some(120)).build(&response.results);

    assert_eq!(limited.chars().count(), 120);
    assert!(unlimited.starts_with(&limited));
}
