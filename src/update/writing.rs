//! Writing-mode operators (to vertical, to horizontal, toggle)
//!
//! Each selected text object is converted independently. Objects that are
//! not text are skipped, objects already in the target representation are
//! left untouched.

use crate::commands::{Cmd, OperatorReport};
use crate::messages::WritingMsg;
use crate::model::{AppModel, HorizontalAlign};
use crate::text::{LineDirection, Representation};

pub fn update_writing(model: &mut AppModel, msg: WritingMsg) -> Option<Cmd> {
    let direction = model.config.direction;
    let align_on_convert = model.config.align_on_convert;
    let mut report = OperatorReport::default();

    for &index in &model.scene.selected {
        let Some(object) = model.scene.objects.get_mut(index) else {
            continue;
        };
        if !object.is_text() {
            report.skipped += 1;
            continue;
        }

        let before = Representation::classify(&object.body);
        let was_vertical = before.is_vertical();
        let after = convert(before, msg, direction);

        if after.is_vertical() == was_vertical {
            report.unchanged.push(object.name.clone());
            continue;
        }

        object.body = after.into_string();
        if align_on_convert {
            object.align = if was_vertical {
                HorizontalAlign::Left
            } else {
                HorizontalAlign::Right
            };
        }

        tracing::debug!(
            object = %object.name,
            vertical = !was_vertical,
            %direction,
            "converted"
        );
        report.converted.push(object.name.clone());
    }

    tracing::info!(
        "{:?}: {} converted, {} unchanged, {} skipped",
        msg,
        report.converted.len(),
        report.unchanged.len(),
        report.skipped
    );

    Some(Cmd::Report {
        operator: msg,
        report,
    })
}

fn convert(rep: Representation, msg: WritingMsg, direction: LineDirection) -> Representation {
    match msg {
        WritingMsg::ToVertical => rep.into_vertical(direction),
        WritingMsg::ToHorizontal => rep.into_horizontal(direction),
        WritingMsg::Toggle => rep.toggled(direction),
    }
}
