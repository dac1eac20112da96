//! Paragraph Processor — splits raw text on blank lines, justifies each
//! paragraph, and reassembles with the original separator.

use crate::errors::JustifyError;
use crate::justify::justifier::{justify_line, render_last_line};
use crate::justify::wrap::wrap_words;

/// Literal separator between paragraphs, on input and output.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Formats `text` into lines of exactly `width` characters (last line of
/// each paragraph excepted). Any oversized word fails the whole text.
pub fn format_text(text: &str, width: usize) -> Result<String, JustifyError> {
    let rendered = text
        .split(PARAGRAPH_SEPARATOR)
        .map(|paragraph| format_paragraph(paragraph, width))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rendered.join(PARAGRAPH_SEPARATOR))
}

/// Formats a single paragraph. Blank paragraphs render as the empty string.
pub fn format_paragraph(paragraph: &str, width: usize) -> Result<String, JustifyError> {
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let lines = wrap_words(&words, width)?;

    let Some((last, body)) = lines.split_last() else {
        return Ok(String::new());
    };

    let mut rendered: Vec<String> = body.iter().map(|l| justify_line(l, width)).collect();
    rendered.push(render_last_line(last));
    Ok(rendered.join("\n"))
}

/// Number of whitespace-separated words in `text`; the quota unit.
pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
