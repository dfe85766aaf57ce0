//! Text soft-wrapping.
//!
//! The text box stores its text unwrapped; wrapping happens only when the
//! widget renders or measures itself. The algorithm is a greedy accumulator:
//! graphemes are appended to the current line until the line exceeds the
//! pixel budget or an explicit `\n` arrives, at which point the line is
//! flushed and the overflowing grapheme starts the next one.

use unicode_segmentation::UnicodeSegmentation;

use crate::font::{FontId, FontManager};
use crate::small_string::SmallString;

/// Split `text` into lines that fit `max_width` pixels.
///
/// A single grapheme wider than the budget still gets its own line - lines
/// are never empty except for explicit blank lines from `\n\n`.
pub fn wrap_text(
    fonts: &FontManager,
    font: FontId,
    text: &str,
    max_width: i32,
) -> Vec<SmallString<128>> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    let mut current: SmallString<128> = SmallString::new();
    for grapheme in text.graphemes(true) {
        if grapheme == "\n" {
            lines.push(std::mem::take(&mut current));
            continue;
        }

        current.push_str(grapheme);
        if fonts.text_width(font, current.as_str()) > max_width && current.len() > grapheme.len() {
            // Carry the overflowing grapheme to the next line.
            let split = current.len() - grapheme.len();
            lines.push(current.substr(0, split));
            current = SmallString::from(grapheme);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn font_fixture() -> (tempfile::TempDir, FontManager, FontId) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.ttf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"bytes")
            .unwrap();
        let mut fonts = FontManager::new();
        // size 16 -> 8px per cell
        let font = fonts.load(&path, 16).unwrap();
        (dir, fonts, font)
    }

    #[test]
    fn test_short_text_is_one_line() {
        let (_dir, fonts, font) = font_fixture();
        let lines = wrap_text(&fonts, font, "hello", 100);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "hello");
    }

    #[test]
    fn test_wraps_at_budget() {
        let (_dir, fonts, font) = font_fixture();
        // 4 cells of 8px fit in 32px; the fifth overflows.
        let lines = wrap_text(&fonts, font, "abcdefgh", 32);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "abcd");
        assert_eq!(lines[1], "efgh");
    }

    #[test]
    fn test_explicit_newlines() {
        let (_dir, fonts, font) = font_fixture();
        let lines = wrap_text(&fonts, font, "ab\n\ncd", 100);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ab");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "cd");
    }

    #[test]
    fn test_narrow_budget_keeps_single_graphemes() {
        let (_dir, fonts, font) = font_fixture();
        let lines = wrap_text(&fonts, font, "abc", 1);
        assert_eq!(lines.len(), 3);
        for (line, expected) in lines.iter().zip(["a", "b", "c"]) {
            assert_eq!(line, expected);
        }
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        let (_dir, fonts, font) = font_fixture();
        assert!(wrap_text(&fonts, font, "", 100).is_empty());
    }
}
