//! Keyword relevance scoring.
//!
//! The score is a plain count: how many times the query's terms occur
//! inside a text. It is only meaningful for ranking chunks against
//! each other, never as an absolute similarity measure.
//!
//! Matching is substring based, so the term "cat" also counts inside
//! "category". There is no stemming, stopword removal or punctuation
//! normalization.

use crate::core::search::query::QueryTerms;

/// Count occurrences of the query's terms inside `text`.
///
/// Both sides are lowercased. The query is split on whitespace, terms
/// shorter than two characters are ignored, and each remaining term
/// adds its number of non-overlapping occurrences in `text`.
///
/// # Examples
///
/// ```
/// use studyrag::core::search::calculate_relevance;
///
/// assert_eq!(calculate_relevance("cat dog", "the cat sat near a dog and a cat"), 3);
/// assert_eq!(calculate_relevance("a b", "a b a b"), 0);
/// ```
pub fn calculate_relevance(query: &str, text: &str) -> usize {
    QueryTerms::parse(query).score(text)
}
