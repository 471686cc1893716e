//! Character, word, and line counts for a block of text.

/// Counts for one block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Unicode scalar values, not bytes.
    pub characters: usize,

    /// Whitespace-separated words.
    pub words: usize,

    /// Newline-delimited lines; zero for the empty string.
    pub lines: usize,
}

/// Count characters, words, and lines.
#[must_use]
pub fn measure(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
    }
}
