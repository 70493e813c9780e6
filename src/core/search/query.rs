//! Query term parsing.
//!
//! A query is lowercased and split on runs of [`is_term_separator`]
//! characters. Terms shorter than [`MIN_TERM_CHARS`] characters are
//! dropped so that stray single letters do not match everywhere.
//! Repeated terms are kept: a term that appears twice in the query
//! counts twice.

use crate::core::error::{RagError, Result};

/// Shortest term, in characters, that contributes to a score
pub const MIN_TERM_CHARS: usize = 2;

/// Characters that separate query terms: Unicode whitespace plus the
/// byte order mark U+FEFF, without NEL U+0085 (the ECMAScript `\s` set).
pub fn is_term_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Lowercased, filtered query terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    /// Parse a raw query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use studyrag::core::search::QueryTerms;
    ///
    /// let terms = QueryTerms::parse("  Mitosis a  PHASE mitosis ");
    /// assert_eq!(terms.as_slice(), ["mitosis", "phase", "mitosis"]);
    /// ```
    pub fn parse(query: &str) -> Self {
        let terms = query
            .to_lowercase()
            .split(is_term_separator)
            .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
            .map(str::to_string)
            .collect();

        Self { terms }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Sum of non-overlapping substring occurrences of every term in
    /// `text`, matched case-insensitively.
    pub fn score(&self, text: &str) -> usize {
        if self.terms.is_empty() {
            return 0;
        }

        let haystack = text.to_lowercase();
        self.terms
            .iter()
            .map(|term| haystack.matches(term.as_str()).count())
            .sum()
    }
}

/// Reject queries longer than `max_chars` characters
pub fn validate_query_length(query: &str, max_chars: usize) -> Result<()> {
    let len = query.chars().count();
    if len > max_chars {
        return Err(RagError::InvalidQuery(format!(
            "Query is {len} characters, maximum is {max_chars}"
        )));
    }
    Ok(())
}
