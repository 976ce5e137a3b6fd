//! Display-width helpers for laying out cell text.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Pad `s` with spaces to exactly `width` display columns.
///
/// Text wider than `width` is returned unchanged.
pub fn pad_to_width(s: &str, width: usize, align: Alignment) -> String {
    let text_width = display_width(s);
    if text_width >= width {
        return s.to_string();
    }

    let free = width - text_width;
    let (left, right) = match align {
        Alignment::Left => (0, free),
        Alignment::Center => (free / 2, free - free / 2),
        Alignment::Right => (free, 0),
    };
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
