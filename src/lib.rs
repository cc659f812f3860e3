//! Pseudo vertical writing
//!
//! Simulates CJK vertical writing in environments that only render
//! horizontal lines, by transposing text into newline-separated columns and
//! back. The transform lives in [`text`]; the rest of the crate is a small
//! Elm-style host that applies it to a selection of text objects.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod i18n;
pub mod messages;
pub mod model;
pub mod text;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WritingConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use text::{is_vertical, to_horizontal, to_vertical, toggle, LineDirection};
