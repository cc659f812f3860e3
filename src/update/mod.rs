//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod selection;
mod writing;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use selection::update_selection;
pub use writing::update_writing;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let _span = span!(Level::DEBUG, "update", msg = ?msg).entered();
    debug!(target: "message", ?msg, "processing");

    match msg {
        Msg::Writing(m) => update_writing(model, m),
        Msg::Selection(m) => update_selection(model, m),
    }
}
