//! Padding placeholder for short lines

/// U+3000 IDEOGRAPHIC SPACE, one full-width cell.
///
/// Inserted wherever a line is shorter than the longest line while
/// transposing, and stripped from the end of reconstructed lines. Genuine
/// trailing ideographic spaces in the original text are stripped as well.
pub const PADDING_CHAR: char = '\u{3000}';

/// The character at `index`, or the padding placeholder past the end.
pub fn char_or_padding(line: &[char], index: usize) -> char {
    line.get(index).copied().unwrap_or(PADDING_CHAR)
}

/// Remove every trailing padding character from `line`.
pub fn strip_trailing(line: &str) -> &str {
    line.trim_end_matches(PADDING_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_or_padding() {
        let line: Vec<char> = "ab".chars().collect();
        assert_eq!(char_or_padding(&line, 1), 'b');
        assert_eq!(char_or_padding(&line, 2), PADDING_CHAR);
        assert_eq!(char_or_padding(&[], 0), PADDING_CHAR);
    }

    #[test]
    fn test_strip_trailing_only_touches_the_end() {
        assert_eq!(strip_trailing("a\u{3000}b\u{3000}\u{3000}"), "a\u{3000}b");
        assert_eq!(strip_trailing("\u{3000}\u{3000}"), "");
        // ASCII spaces are content, not padding
        assert_eq!(strip_trailing("a "), "a ");
    }
}
