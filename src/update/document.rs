//! Document message handlers (text editing, undo/redo)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages for the active document
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(text) => {
            model.document_mut().insert_text(&text);
        }

        DocumentMsg::InsertNewline => {
            model.document_mut().insert_text("\n");
        }

        DocumentMsg::DeleteBackward => {
            model.document_mut().delete_backward();
        }

        DocumentMsg::DeleteForward => {
            model.document_mut().delete_forward();
        }

        DocumentMsg::SetCursor(offset) => {
            if !model.document_mut().set_cursor(offset) {
                let len = model.document().len_chars();
                model
                    .ui
                    .set_status(format!("Offset {} past end, moved to {}", offset, len));
                return Some(Cmd::None);
            }
        }

        DocumentMsg::Undo => {
            if !model.document_mut().undo() {
                model.ui.set_status("Nothing to undo");
                return Some(Cmd::None);
            }
        }

        DocumentMsg::Redo => {
            if !model.document_mut().redo() {
                model.ui.set_status("Nothing to redo");
                return Some(Cmd::None);
            }
        }
    }

    sync_position_status(model);
    Some(Cmd::None)
}

/// Refresh the "Ln/Col" status label after a cursor or content change
pub(crate) fn sync_position_status(model: &mut AppModel) {
    if model.config.show_position {
        let label = model.document().position_label();
        model.ui.set_status(label);
    }
}
