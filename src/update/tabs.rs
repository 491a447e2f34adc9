//! Tab message handlers (switching and closing documents)

use crate::commands::Cmd;
use crate::messages::TabMsg;
use crate::model::{AppModel, PendingAction};

use super::app::{forget_save_as_target, gate};

/// Handle tab messages
pub fn update_tabs(model: &mut AppModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::SwitchToIndex(index) => {
            if model.registry.set_active_index(index) {
                on_active_changed(model);
            } else {
                model.ui.set_status(format!("No tab {}", index + 1));
            }
            Some(Cmd::None)
        }

        TabMsg::Next => {
            model.registry.next_tab();
            on_active_changed(model);
            Some(Cmd::None)
        }

        TabMsg::Prev => {
            model.registry.prev_tab();
            on_active_changed(model);
            Some(Cmd::None)
        }

        // Dirty documents ask first
        TabMsg::Close(id) => gate(model, id, PendingAction::CloseDocument),

        TabMsg::CloseActive => {
            let id = model.registry.active_id();
            gate(model, id, PendingAction::CloseDocument)
        }
    }
}

/// Reset per-document UI state after the active tab changes
fn on_active_changed(model: &mut AppModel) {
    model.find.last_match = None;
    forget_save_as_target(model);
    let title = model.title();
    model.ui.set_status(title);
}
