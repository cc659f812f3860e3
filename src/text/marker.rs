//! Horizontal/vertical state detection
//!
//! Transposed text is recognized purely by its last character: a trailing
//! line separator. Inside the crate the two states are kept apart by
//! [`Representation`]; the marker only exists in host-facing strings.

/// Line separator, doubling as the "already vertical" marker when trailing.
pub const MARKER: char = '\n';

/// Is `text` already in pseudo vertical form?
///
/// Empty text is horizontal.
pub fn is_vertical(text: &str) -> bool {
    text.ends_with(MARKER)
}

/// Text tagged with the layout it is currently in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// Ordinary lines joined with `\n`.
    Horizontal(String),
    /// Transposed columns joined with `\n`, without the trailing marker.
    Vertical(String),
}

impl Representation {
    /// Tag a host string according to the trailing marker.
    pub fn classify(text: &str) -> Self {
        match text.strip_suffix(MARKER) {
            Some(columns) => Self::Vertical(columns.to_string()),
            None => Self::Horizontal(text.to_string()),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical(_))
    }

    /// Lines or columns, without any marker.
    pub fn body(&self) -> &str {
        match self {
            Self::Horizontal(body) | Self::Vertical(body) => body,
        }
    }

    /// Render back into a host string, appending the marker to vertical text.
    pub fn into_string(self) -> String {
        match self {
            Self::Horizontal(lines) => lines,
            Self::Vertical(mut columns) => {
                columns.push(MARKER);
                columns
            }
        }
    }
}

impl From<&str> for Representation {
    fn from(text: &str) -> Self {
        Self::classify(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_horizontal() {
        assert!(!is_vertical(""));
        assert_eq!(
            Representation::classify(""),
            Representation::Horizontal(String::new())
        );
    }

    #[test]
    fn test_trailing_newline_is_vertical() {
        assert!(is_vertical("\n"));
        assert!(is_vertical("CA\n\u{3000}B\n"));
        assert!(!is_vertical("AB\nC"));
    }

    #[test]
    fn test_classify_strips_exactly_one_marker() {
        let rep = Representation::classify("ab\n\n");
        assert_eq!(rep, Representation::Vertical("ab\n".to_string()));
        assert_eq!(rep.body(), "ab\n");
        assert_eq!(rep.into_string(), "ab\n\n");
    }

    #[test]
    fn test_into_string_round_trips() {
        for text in ["", "\n", "abc", "a\nb", "a\nb\n"] {
            assert_eq!(Representation::classify(text).into_string(), text);
        }
    }
}
