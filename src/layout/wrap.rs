//! Word-preserving cell wrapping.

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// A cell's text broken into visual lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedCell {
    /// Wrapped lines, never empty
    pub lines: Vec<String>,
}

impl WrappedCell {
    /// Number of visual lines the cell occupies (at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines joined with `\n`.
    pub fn wrapped_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Wrap `text` into lines of at most `wrap_width` characters.
///
/// Words are never split: a word longer than `wrap_width` gets a line of its
/// own. Newlines in the input are hard breaks and whitespace runs collapse to
/// a single space. Width is counted in NFC characters.
pub fn wrap_cell(text: &str, wrap_width: usize) -> Result<WrappedCell> {
    if wrap_width == 0 {
        return Err(Error::InvalidArgument(
            "wrap width must be positive".to_string(),
        ));
    }

    let normalized: String = text.nfc().collect();
    let mut lines = Vec::new();
    for segment in normalized.split('\n') {
        wrap_segment(segment, wrap_width, &mut lines);
    }

    Ok(WrappedCell { lines })
}

fn wrap_segment(segment: &str, wrap_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in segment.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= wrap_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    // A blank segment still occupies one line.
    lines.push(current);
}
