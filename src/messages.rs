//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Writing-mode operators, applied to every selected text object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingMsg {
    /// Convert to pseudo vertical writing
    ToVertical,
    /// Convert back to horizontal writing
    ToHorizontal,
    /// Convert each object to whichever representation it is not in
    Toggle,
}

/// Selection changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMsg {
    Select(usize),
    SelectAll,
    DeselectAll,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Writing(WritingMsg),
    Selection(SelectionMsg),
}
