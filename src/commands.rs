//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::messages::WritingMsg;

/// What a writing operator did to the selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorReport {
    /// Names of objects whose body was converted
    pub converted: Vec<String>,
    /// Names of text objects already in the target representation
    pub unchanged: Vec<String>,
    /// Selected objects that carry no text
    pub skipped: usize,
}

impl OperatorReport {
    pub fn is_noop(&self) -> bool {
        self.converted.is_empty()
    }
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Selected objects were processed by an operator
    Report {
        operator: WritingMsg,
        report: OperatorReport,
    },
}
