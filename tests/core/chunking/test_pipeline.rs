// Document pipeline tests: loading files and chunking many documents

use crate::common::{lecture_documents, TestDocs};
use studyrag::{DocumentPipeline, RagError};

#[test]
fn test_load_lecture_files() {
    let docs = TestDocs::lectures();
    let pipeline = DocumentPipeline::new(50, 10, 10).unwrap();

    let (documents, stats) = pipeline.load_files(&docs.files);

    assert_eq!(stats.documents_loaded, 3);
    assert_eq!(stats.documents_skipped, 0);
    assert_eq!(documents[0].name, "week1-cells.txt");
    assert_eq!(documents, lecture_documents());
}

#[test]
fn test_oversized_file_skipped() {
    let big = "a".repeat(1024 * 1024 + 10);
    let docs = TestDocs::with_files(&[("big.txt", &big), ("small.txt", "tiny")]);
    let pipeline = DocumentPipeline::new(50, 10, 1).unwrap();

    let (documents, stats) = pipeline.load_files(&docs.files);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "small.txt");
    assert_eq!(stats.documents_skipped, 1);

    let err = pipeline.load_file(&docs.files[0]).unwrap_err();
    assert!(matches!(err, RagError::DocumentError(_)));
}

#[test]
fn test_chunk_documents_keeps_document_order() {
    let pipeline = DocumentPipeline::new(40, 5, 10).unwrap();
    let documents = lecture_documents();

    let (chunks, stats) = pipeline.chunk_documents(&documents);

    assert_eq!(stats.documents_chunked, 3);
    assert_eq!(stats.chunks_created, chunks.len());

    let mut last_source = String::new();
    let mut seen_sources = Vec::new();
    for chunk in &chunks {
        if chunk.source != last_source {
            assert_eq!(chunk.chunk.index, 0, "Indices restart per document");
            seen_sources.push(chunk.source.clone());
            last_source = chunk.source.clone();
        }
    }
    assert_eq!(
        seen_sources,
        ["week1-cells.txt", "week2-energy.txt", "week3-division.txt"]
    );
}
