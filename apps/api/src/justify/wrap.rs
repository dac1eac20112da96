//! Line Wrapper — greedy, leftmost-maximal packing of words into lines.
//!
//! Widths are counted in characters. A word is never split: a single word
//! wider than the target fails the whole call with `WordTooLong`.

use crate::errors::JustifyError;

/// One output row: the words assigned to it, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub words: Vec<&'a str>,
    /// Sum of word widths, separators excluded.
    pub char_count: usize,
}

impl<'a> Line<'a> {
    fn start(word: &'a str, width: usize) -> Self {
        Self {
            words: vec![word],
            char_count: width,
        }
    }

    /// Width of the words joined by single spaces.
    pub fn natural_width(&self) -> usize {
        self.char_count + self.words.len().saturating_sub(1)
    }
}

/// Character width of a word.
pub fn word_width(word: &str) -> usize {
    word.chars().count()
}

/// Packs `words` into lines no wider than `width` when single-space joined.
///
/// An empty word sequence yields no lines.
pub fn wrap_words<'a>(words: &[&'a str], width: usize) -> Result<Vec<Line<'a>>, JustifyError> {
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut current: Option<Line<'a>> = None;

    for &word in words {
        let w = word_width(word);
        if w > width {
            return Err(JustifyError::WordTooLong {
                word: word.to_string(),
                limit: width,
            });
        }

        if let Some(line) = current.as_mut() {
            if line.natural_width() + 1 + w <= width {
                line.words.push(word);
                line.char_count += w;
                continue;
            }
        }
        lines.extend(current.take());
        current = Some(Line::start(word, w));
    }

    lines.extend(current);
    Ok(lines)
}
