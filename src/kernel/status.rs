//! Word/character counts derived from document content.

use ropey::Rope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub word_count: usize,
    pub char_count: usize,
}

impl StatusSnapshot {
    pub fn compute(text: &str) -> Self {
        Self::from_chunks(std::iter::once(text))
    }

    pub fn from_rope(rope: &Rope) -> Self {
        Self::from_chunks(rope.chunks())
    }

    /// A word is a maximal run of non-whitespace chars; runs may span chunk boundaries.
    fn from_chunks<'a>(chunks: impl Iterator<Item = &'a str>) -> Self {
        let mut word_count = 0usize;
        let mut char_count = 0usize;
        let mut in_word = false;

        for chunk in chunks {
            for ch in chunk.chars() {
                char_count += 1;
                if ch.is_whitespace() {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    word_count += 1;
                }
            }
        }

        Self {
            word_count,
            char_count,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/status.rs"]
mod tests;
