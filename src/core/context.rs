//! Reference context assembly.
//!
//! Turns ranked passages into the block of reference text that is
//! placed in front of a language-model prompt. Each passage is
//! labelled with its document so answers can cite where information
//! came from.

use crate::core::types::RetrievalResult;

/// Separator placed between passages
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Builds a labelled context block from ranked passages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextBuilder {
    /// Character budget, 0 for unlimited
    max_chars: usize,
}

impl ContextBuilder {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Header line for a passage
    pub fn header(result: &RetrievalResult) -> String {
        format!(
            "[Document: {} | chunk {} | chars {}-{}]",
            result.source, result.chunk.index, result.chunk.start, result.chunk.end
        )
    }

    /// Assemble passages in rank order.
    ///
    /// With a budget, passages are appended while the total stays
    /// within `max_chars` characters. The first passage that would
    /// overflow is cut at a character boundary and assembly stops.
    pub fn build(&self, results: &[RetrievalResult]) -> String {
        let mut context = String::new();
        let mut used = 0;

        for (i, result) in results.iter().enumerate() {
            let mut block = String::new();
            if i > 0 {
                block.push_str(PASSAGE_SEPARATOR);
            }
            block.push_str(&Self::header(result));
            block.push('\n');
            block.push_str(&result.chunk.text);

            if self.max_chars == 0 {
                context.push_str(&block);
                continue;
            }

            let block_chars = block.chars().count();
            let remaining = self.max_chars - used;
            if block_chars <= remaining {
                context.push_str(&block);
                used += block_chars;
                continue;
            }

            tracing::debug!(
                "Context budget of {} chars reached after {} passages",
                self.max_chars,
                i
            );
            context.extend(block.chars().take(remaining));
            break;
        }

        context
    }
}
