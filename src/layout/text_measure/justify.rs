//! Line justification.
//!
//! Pads a string to a fixed width according to an [`Alignment`]. Full
//! justification spreads the free cells over the gaps between words; the
//! distribution rule is shared with [`Flow`](crate::Flow), which uses it to
//! space items along a row.

use std::iter::repeat_n;

use super::line_width;
use crate::types::{Alignment, BLANK};

/// Pad `text` to `len` cells using `alignment`.
///
/// Aligning into too little space is a no-op: when `len` is not larger than
/// the text, the text comes back unchanged and is never truncated.
///
/// # Arguments
///
/// * `text` - A single line of text
/// * `len` - Target width in cells
/// * `alignment` - Where the free cells go
pub fn justify(text: &str, len: usize, alignment: Alignment) -> String {
    let content = line_width(text);
    if len <= content {
        return text.to_string();
    }

    let spare = len - content;
    let mut out = String::with_capacity(text.len() + spare);

    match alignment {
        Alignment::Left => {
            out.push_str(text);
            out.extend(repeat_n(BLANK, spare));
        }
        Alignment::Right => {
            out.extend(repeat_n(BLANK, spare));
            out.push_str(text);
        }
        Alignment::Center => {
            out.extend(repeat_n(BLANK, spare / 2));
            out.push_str(text);
            out.extend(repeat_n(BLANK, spare - spare / 2));
        }
        Alignment::Justify => {
            let words: Vec<&str> = text.split(' ').collect();
            let content: usize = words.iter().map(|word| line_width(word)).sum();
            let gaps = justify_spaces(len, content, words.len());

            for (word, gap) in words.iter().zip(&gaps) {
                out.push_str(word);
                out.extend(repeat_n(BLANK, *gap));
            }
            if let Some(last) = words.last() {
                out.push_str(last);
            }

            // A single word has no gaps to absorb the space.
            let written = line_width(&out);
            out.extend(repeat_n(BLANK, len.saturating_sub(written)));
        }
    }

    out
}

/// Distribute `total - content` cells over the `count - 1` gaps between items.
///
/// Cells are handed out one at a time starting at the last gap and walking
/// backwards, wrapping around to the last gap again. Every gap therefore gets
/// the same base share, and the leftover cells land on the rightmost gaps.
///
/// Returns one entry per gap (empty for fewer than two items).
pub fn justify_spaces(total: usize, content: usize, count: usize) -> Vec<usize> {
    if count < 2 {
        return Vec::new();
    }

    let gaps = count - 1;
    let remaining = total.saturating_sub(content);
    let base = remaining / gaps;
    let leftover = remaining % gaps;

    (0..gaps)
        .map(|i| base + usize::from(i >= gaps - leftover))
        .collect()
}
