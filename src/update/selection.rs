//! Selection message handlers

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::AppModel;

pub fn update_selection(model: &mut AppModel, msg: SelectionMsg) -> Option<Cmd> {
    match msg {
        SelectionMsg::Select(index) => {
            model.scene.select(index);
        }
        SelectionMsg::SelectAll => model.scene.select_all(),
        SelectionMsg::DeselectAll => model.scene.deselect_all(),
    }
    None
}
