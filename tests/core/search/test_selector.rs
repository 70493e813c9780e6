// Top-K chunk selection tests: ordering, stability and bounds

use crate::common::chunk;
use studyrag::core::search::Scorable;
use studyrag::{find_relevant_chunks, ChunkSelector, RagError, TextChunk};

fn indices(chunks: &[TextChunk]) -> Vec<usize> {
    chunks.iter().map(|c| c.index).collect()
}

#[test]
fn test_reference_example_selection() {
    let chunks = vec![
        chunk(0, "cat and cat"),
        chunk(1, "nothing here"),
        chunk(2, "a cat, another cat"),
    ];

    let selected = find_relevant_chunks("cat", &chunks, 2);
    assert_eq!(selected, vec![chunks[0].clone(), chunks[2].clone()]);
}

#[test]
fn test_descending_order() {
    let chunks = vec![
        chunk(0, "atp"),
        chunk(1, "atp atp atp"),
        chunk(2, ""),
        chunk(3, "atp atp"),
    ];

    let selected = find_relevant_chunks("atp", &chunks, 4);
    assert_eq!(indices(&selected), [1, 3, 0, 2]);

    let scores: Vec<usize> = selected
        .iter()
        .map(|c| studyrag::calculate_relevance("atp", c.scorable_text()))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_ties_keep_input_order() {
    let chunks: Vec<TextChunk> = (0..8).map(|i| chunk(i, "same text")).collect();

    let selected = find_relevant_chunks("text", &chunks, 5);
    assert_eq!(indices(&selected), [0, 1, 2, 3, 4]);

    // No query terms at all: every score is 0
    let selected = find_relevant_chunks("", &chunks, 3);
    assert_eq!(indices(&selected), [0, 1, 2]);
}

#[test]
fn test_result_count_bounds() {
    let chunks: Vec<TextChunk> = (0..4).map(|i| chunk(i, "x")).collect();

    for k in 0..8 {
        let selected = find_relevant_chunks("anything", &chunks, k);
        assert_eq!(selected.len(), k.min(chunks.len()));
    }
    assert!(find_relevant_chunks("x", &[], 3).is_empty());
}

#[test]
fn test_zero_scores_still_fill_the_result() {
    let chunks = vec![chunk(0, "alpha"), chunk(1, "beta"), chunk(2, "gamma")];

    let selected = find_relevant_chunks("beta", &chunks, 3);
    assert_eq!(indices(&selected), [1, 0, 2]);
}

#[test]
fn test_selector_rejects_zero() {
    assert!(matches!(
        ChunkSelector::new(0),
        Err(RagError::InvalidArgument(_))
    ));
}

#[test]
fn test_selector_default_returns_three() {
    let chunks: Vec<TextChunk> = (0..10).map(|i| chunk(i, "ribosome")).collect();
    let selector = ChunkSelector::default();

    assert_eq!(selector.select("ribosome", &chunks).len(), 3);

    let scored = selector.select_scored("ribosome", &chunks);
    assert!(scored.iter().all(|s| s.score == 1));
}
