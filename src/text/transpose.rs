//! Forward and inverse transposition
//!
//! Forward: line `i` of the (optionally reversed) input contributes the
//! `i`-th character of every column; short lines are padded with
//! [`PADDING_CHAR`](super::PADDING_CHAR). Inverse: every column is read from
//! its end, so columns of unequal length (hand edited, or ragged input) still
//! line up, and missing positions contribute nothing.
//!
//! ```text
//!   AB   to_vertical(rtl)   CA
//!   C    --------------->   　B
//! ```

use super::direction::LineDirection;
use super::marker::{Representation, MARKER};
use super::padding;

/// Convert horizontal `text` to pseudo vertical writing.
///
/// With `lines_rtl` the first line becomes the rightmost column. Text that
/// is already vertical is returned unchanged.
pub fn to_vertical(text: &str, lines_rtl: bool) -> String {
    Representation::classify(text)
        .into_vertical(LineDirection::from_rtl(lines_rtl))
        .into_string()
}

/// Convert pseudo vertical `text` back to horizontal lines.
///
/// `lines_rtl` must match the value used by [`to_vertical`]. Horizontal text
/// is returned unchanged.
pub fn to_horizontal(text: &str, lines_rtl: bool) -> String {
    Representation::classify(text)
        .into_horizontal(LineDirection::from_rtl(lines_rtl))
        .into_string()
}

/// Flip `text` to the other representation.
pub fn toggle(text: &str, lines_rtl: bool) -> String {
    Representation::classify(text)
        .toggled(LineDirection::from_rtl(lines_rtl))
        .into_string()
}

impl Representation {
    /// Transpose into columns. No-op if already vertical.
    pub fn into_vertical(self, direction: LineDirection) -> Self {
        match self {
            Self::Horizontal(lines) => Self::Vertical(lines_to_columns(&lines, direction)),
            vertical @ Self::Vertical(_) => vertical,
        }
    }

    /// Transpose back into lines. No-op if already horizontal.
    pub fn into_horizontal(self, direction: LineDirection) -> Self {
        match self {
            Self::Vertical(columns) => Self::Horizontal(columns_to_lines(&columns, direction)),
            horizontal @ Self::Horizontal(_) => horizontal,
        }
    }

    pub fn toggled(self, direction: LineDirection) -> Self {
        if self.is_vertical() {
            self.into_horizontal(direction)
        } else {
            self.into_vertical(direction)
        }
    }
}

fn lines_to_columns(text: &str, direction: LineDirection) -> String {
    let mut lines: Vec<Vec<char>> = text.split(MARKER).map(|l| l.chars().collect()).collect();
    if direction.is_rtl() {
        lines.reverse();
    }

    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let columns: Vec<String> = (0..width)
        .map(|i| {
            lines
                .iter()
                .map(|line| padding::char_or_padding(line, i))
                .collect()
        })
        .collect();

    columns.join("\n")
}

fn columns_to_lines(text: &str, direction: LineDirection) -> String {
    let columns: Vec<Vec<char>> = text.split(MARKER).map(|c| c.chars().collect()).collect();
    let depth = columns.iter().map(Vec::len).max().unwrap_or(0);

    // Offset 1 is the last character of each column. Short columns simply
    // drop out; they are never padded here.
    let mut lines: Vec<String> = (1..=depth)
        .map(|offset| {
            let line: String = columns
                .iter()
                .filter_map(|column| {
                    column
                        .len()
                        .checked_sub(offset)
                        .map(|index| column[index])
                })
                .collect();
            padding::strip_trailing(&line).to_string()
        })
        .collect();

    if !direction.is_rtl() {
        lines.reverse();
    }

    lines.join("\n")
}
