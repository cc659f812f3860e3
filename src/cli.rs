//! Command-line argument parsing for pvtext
//!
//! Supports:
//! - Converting stdin or files to and from pseudo vertical writing
//! - Writing results back in place
//! - Reporting the current state of each input
//!
//! Input is used verbatim: a trailing newline marks vertical text, so pipe
//! horizontal text with `printf` rather than `echo`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::WritingConfig;
use crate::messages::WritingMsg;
use crate::text::LineDirection;

/// What to do with each input
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Convert to pseudo vertical writing
    Vertical,
    /// Convert back to horizontal writing
    Horizontal,
    /// Convert each input to the other representation
    Toggle,
    /// Report whether each input is vertical or horizontal
    Status,
}

impl Operation {
    /// The writing operator this maps to, if any
    pub fn writing_msg(self) -> Option<WritingMsg> {
        match self {
            Self::Vertical => Some(WritingMsg::ToVertical),
            Self::Horizontal => Some(WritingMsg::ToHorizontal),
            Self::Toggle => Some(WritingMsg::Toggle),
            Self::Status => None,
        }
    }

    /// Translation id of the operator's label
    pub fn label_id(self) -> &'static str {
        match self {
            Self::Vertical => "to-vertical-label",
            Self::Horizontal => "to-horizontal-label",
            Self::Toggle => "toggle-label",
            Self::Status => "panel-label",
        }
    }
}

/// Simulate vertical writing with newlines
#[derive(Parser, Debug)]
#[command(
    name = "pvtext",
    version,
    about = "Simulate CJK vertical writing with newlines",
    after_help = "Input is used verbatim: a trailing newline marks text as already vertical."
)]
pub struct CliArgs {
    /// Operation to perform
    #[arg(value_enum, default_value_t = Operation::Toggle)]
    pub operation: Operation,

    /// Files to convert (reads stdin when empty)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Columns read left to right (first line becomes the leftmost column)
    #[arg(long, conflicts_with = "rtl")]
    pub ltr: bool,

    /// Columns read right to left (default unless configured otherwise)
    #[arg(long)]
    pub rtl: bool,

    /// Write results back to the files instead of stdout
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Print status as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not change alignment when converting
    #[arg(long)]
    pub no_align: bool,
}

/// Where text comes from and goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single body read from stdin, written to stdout
    Stdin,
    /// One text object per file
    Files(Vec<PathBuf>),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub operation: Operation,
    pub input: Input,
    pub in_place: bool,
    pub json: bool,
    /// Overrides the configured direction when set
    pub direction: Option<LineDirection>,
    /// Disables the alignment side effect when true
    pub no_align: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.in_place && self.paths.is_empty() {
            return Err("--in-place requires at least one file".to_string());
        }
        if self.in_place && self.operation == Operation::Status {
            return Err("--in-place cannot be used with status".to_string());
        }
        if self.json && self.operation != Operation::Status {
            return Err("--json is only supported by status".to_string());
        }

        let direction = if self.ltr {
            Some(LineDirection::LeftToRight)
        } else if self.rtl {
            Some(LineDirection::RightToLeft)
        } else {
            None
        };

        let input = if self.paths.is_empty() {
            Input::Stdin
        } else {
            Input::Files(self.paths)
        };

        Ok(RunConfig {
            operation: self.operation,
            input,
            in_place: self.in_place,
            json: self.json,
            direction,
            no_align: self.no_align,
        })
    }
}

impl RunConfig {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut WritingConfig) {
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if self.no_align {
            config.align_on_convert = false;
        }
    }
}
