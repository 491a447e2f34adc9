//! App message handlers (file operations, unsaved-changes prompt, exit)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::{AppMsg, OpenOrigin};
use crate::model::confirm::prompt_text;
use crate::model::{AppModel, ConfirmChoice, Document, DocumentId, GateOutcome, PendingAction};
use crate::util::{filename_for_display, FileError};

/// Handle app messages (file operations, confirmation, exit)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::NewFile => {
            if model.config.tabbed {
                model.registry.new_untitled();
                model.find.last_match = None;
                forget_save_as_target(model);
                model.ui.set_status("New file");
                Some(Cmd::None)
            } else {
                let id = model.registry.active_id();
                gate(model, id, PendingAction::NewDocument)
            }
        }

        AppMsg::OpenFile { path, origin } => {
            if let Some(id) = model.registry.find_open_file(&path) {
                model.registry.set_active(id);
                forget_save_as_target(model);
                model
                    .ui
                    .set_status(format!("Already open: {}", path.display()));
                return Some(Cmd::None);
            }

            if model.config.tabbed {
                model.ui.set_status("Loading...");
                Some(Cmd::LoadFile {
                    path,
                    origin,
                    replace: None,
                })
            } else {
                let id = model.registry.active_id();
                gate(model, id, PendingAction::OpenFile(path))
            }
        }

        AppMsg::FileLoaded {
            path,
            origin,
            replace,
            result,
        } => file_loaded(model, path, origin, replace, result),

        AppMsg::SaveFile => {
            let id = model.registry.active_id();
            save_document(model, id)
        }

        AppMsg::SaveFileAs(path) => {
            let active = model.registry.active_id();
            let id = model
                .ui
                .awaiting_save_as
                .take()
                .filter(|id| *id == active || has_pending(model, *id))
                .unwrap_or(active);
            match model.registry.get(id) {
                Some(doc) => Some(Cmd::SaveFile {
                    document_id: id,
                    path,
                    content: doc.text(),
                }),
                None => {
                    model.ui.set_status(format!("No document {}", id));
                    Some(Cmd::None)
                }
            }
        }

        AppMsg::SaveCompleted {
            document_id,
            path,
            result,
        } => save_completed(model, document_id, path, result),

        AppMsg::Confirm(choice) => resolve_confirm(model, choice),

        AppMsg::Quit => quit(model),
    }
}

/// Run `action` now if the document is clean, or ask first if it is dirty
pub(crate) fn gate(model: &mut AppModel, id: DocumentId, action: PendingAction) -> Option<Cmd> {
    let Some(doc) = model.registry.get_mut(id) else {
        model.ui.set_status(format!("No document {}", id));
        return Some(Cmd::None);
    };

    match doc.request_action(action.clone()) {
        GateOutcome::Proceed => run_pending_action(model, id, action),
        GateOutcome::Prompt => {
            model.registry.set_active(id);
            open_prompt_for(model, id);
            Some(Cmd::None)
        }
        GateOutcome::Ignored => Some(Cmd::None),
    }
}

/// Show the unsaved-changes prompt for a document
pub(crate) fn open_prompt_for(model: &mut AppModel, id: DocumentId) {
    let Some(doc) = model.registry.get(id) else {
        return;
    };
    let text = prompt_text(&doc.display_name());
    model.ui.set_status(text.clone());
    model.ui.open_prompt(text);
}

fn has_pending(model: &AppModel, id: DocumentId) -> bool {
    model
        .registry
        .get(id)
        .is_some_and(|doc| doc.pending.is_some())
}

/// Drop a save-as target that no longer answers a pending prompt
pub(crate) fn forget_save_as_target(model: &mut AppModel) {
    if let Some(id) = model.ui.awaiting_save_as {
        if !has_pending(model, id) {
            model.ui.awaiting_save_as = None;
        }
    }
}

/// Re-show the prompt for the next pending document, or hide it
fn refresh_prompt(model: &mut AppModel) {
    match model.pending_document_id() {
        Some(id) => open_prompt_for(model, id),
        None => model.ui.close_prompt(),
    }
}

/// Perform an action that has passed the unsaved-changes check
pub fn run_pending_action(
    model: &mut AppModel,
    id: DocumentId,
    action: PendingAction,
) -> Option<Cmd> {
    tracing::debug!(%id, action = action.describe(), "running action");
    match action {
        PendingAction::CloseDocument => {
            if let Some(doc) = model.registry.remove_document(id) {
                model
                    .ui
                    .set_status(format!("Closed {}", doc.display_name()));
            }
            model.find.last_match = None;
            forget_save_as_target(model);
            Some(Cmd::None)
        }

        PendingAction::NewDocument => {
            let mut doc = Document::new();
            doc.set_history_limit(model.config.history_limit);
            model.registry.replace_document(id, doc);
            model.find.last_match = None;
            forget_save_as_target(model);
            model.ui.set_status("New file");
            Some(Cmd::None)
        }

        PendingAction::OpenFile(path) => {
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile {
                path,
                origin: OpenOrigin::Dialog,
                replace: Some(id),
            })
        }

        PendingAction::Quit => quit(model),
    }
}

/// Start a save of `id`, or ask for a path if it has none yet
pub(crate) fn save_document(model: &mut AppModel, id: DocumentId) -> Option<Cmd> {
    let Some(doc) = model.registry.get(id) else {
        model.ui.set_status(format!("No document {}", id));
        return Some(Cmd::None);
    };

    match doc.save_path() {
        Some(path) => Some(Cmd::SaveFile {
            document_id: id,
            path: path.to_path_buf(),
            content: doc.text(),
        }),
        None => {
            let name = doc.display_name();
            model.ui.awaiting_save_as = Some(id);
            model
                .ui
                .set_status(format!("Save '{}' as: enter a path with :saveas PATH", name));
            Some(Cmd::None)
        }
    }
}

fn file_loaded(
    model: &mut AppModel,
    path: PathBuf,
    origin: OpenOrigin,
    replace: Option<DocumentId>,
    result: Result<String, FileError>,
) -> Option<Cmd> {
    let limit = model.config.history_limit;
    let (document, status) = match result {
        Ok(content) => {
            let status = match origin {
                OpenOrigin::Startup => format!("Loaded: {}", path.display()),
                OpenOrigin::Dialog => format!("Opened: {}", path.display()),
            };
            (Document::loaded(path, &content, limit), status)
        }
        Err(FileError::NotFound) => {
            tracing::info!("{} does not exist, starting a new file", path.display());
            let status = format!("New file: {}", path.display());
            (Document::new_with_path_and_limit(path, limit), status)
        }
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
            model
                .ui
                .show_error(e.user_message(&filename_for_display(&path)));
            return Some(Cmd::None);
        }
    };

    // An untouched untitled tab is taken over instead of kept beside the file
    let replace = replace
        .filter(|id| model.registry.index_of(*id).is_some())
        .or_else(|| {
            let active = model.document();
            let untouched = active.file_path.is_none()
                && active.len_chars() == 0
                && !active.is_modified
                && active.pending.is_none();
            untouched.then(|| model.registry.active_id())
        });
    match replace {
        Some(id) => {
            model.registry.replace_document(id, document);
        }
        None => {
            model.registry.add_document(document);
        }
    }

    model.find.last_match = None;
    forget_save_as_target(model);
    model.ui.set_status(status);
    Some(Cmd::None)
}

fn save_completed(
    model: &mut AppModel,
    id: DocumentId,
    path: PathBuf,
    result: Result<(), FileError>,
) -> Option<Cmd> {
    let Some(doc) = model.registry.get_mut(id) else {
        return Some(Cmd::None);
    };

    match result {
        Ok(()) => {
            doc.mark_saved(path.clone());
            tracing::info!("Saved {}", path.display());
            model.ui.set_status(format!("Saved: {}", path.display()));

            if let Some(action) = doc.pending.take() {
                let cmd = run_pending_action(model, id, action);
                refresh_prompt(model);
                return cmd;
            }
            Some(Cmd::None)
        }
        Err(e) => {
            tracing::warn!("Failed to save {}: {}", path.display(), e);
            if doc.needs_save_as() {
                model.ui.awaiting_save_as = Some(id);
            }
            // Any pending action and its prompt stay in place for another try
            model
                .ui
                .show_error(e.user_message(&filename_for_display(&path)));
            Some(Cmd::None)
        }
    }
}

fn resolve_confirm(model: &mut AppModel, choice: ConfirmChoice) -> Option<Cmd> {
    let Some(id) = model.pending_document_id() else {
        model.ui.set_status("Nothing to confirm");
        return Some(Cmd::None);
    };

    let cmd = match choice {
        ConfirmChoice::Save => {
            // The prompt stays up until the save reports back
            return save_document(model, id);
        }

        ConfirmChoice::Discard => {
            model.ui.awaiting_save_as = None;
            let action = model.registry.get_mut(id).and_then(|doc| {
                doc.force_clean();
                doc.pending.take()
            });
            match action {
                Some(action) => run_pending_action(model, id, action),
                None => Some(Cmd::None),
            }
        }

        ConfirmChoice::Cancel => {
            model.ui.awaiting_save_as = None;
            if let Some(doc) = model.registry.get_mut(id) {
                doc.pending = None;
            }
            model.ui.set_status("Cancelled");
            Some(Cmd::None)
        }
    };

    refresh_prompt(model);
    cmd
}

/// Exit once no document has unsaved changes, asking about each dirty one
fn quit(model: &mut AppModel) -> Option<Cmd> {
    if model.pending_document_id().is_some() {
        return Some(Cmd::None);
    }

    let dirty = model
        .registry
        .iter()
        .find(|doc| doc.is_modified)
        .and_then(|doc| doc.id);

    match dirty {
        Some(id) => gate(model, id, PendingAction::Quit),
        None => {
            tracing::info!("Quit requested");
            Some(Cmd::Quit)
        }
    }
}
