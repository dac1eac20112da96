//! Justifier — renders a wrapped line to an exact target width.
//!
//! Non-final lines are stretched: a lone word is padded on the right, and
//! otherwise the slack is spread over the gaps with the leftmost gaps taking
//! the remainder. The last line of a paragraph stays ragged (single spaces,
//! no padding).

use crate::justify::wrap::Line;

/// Renders a non-final line to exactly `width` characters.
///
/// Relies on the wrapper's guarantee that `line.natural_width() <= width`.
pub fn justify_line(line: &Line<'_>, width: usize) -> String {
    let mut out = String::with_capacity(width);

    if let [word] = line.words.as_slice() {
        out.push_str(word);
        pad(&mut out, width.saturating_sub(line.char_count));
        return out;
    }

    let gaps = line.words.len().saturating_sub(1);
    let total_spaces = width.saturating_sub(line.char_count);
    let (base, extra) = match gaps {
        0 => (0, 0),
        _ => (total_spaces / gaps, total_spaces % gaps),
    };

    for (i, word) in line.words.iter().enumerate() {
        if i > 0 {
            pad(&mut out, base + usize::from(i <= extra));
        }
        out.push_str(word);
    }
    out
}

/// Renders the final line of a paragraph: single spaces, no padding.
pub fn render_last_line(line: &Line<'_>) -> String {
    line.words.join(" ")
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}
