//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::Path;

use epad::commands::Cmd;
use epad::config::EditorConfig;
use epad::messages::{DocumentMsg, Msg};
use epad::model::{AppModel, Document};
use epad::runtime::App;
use epad::update::update;

/// Create a test model with given text and cursor offset
pub fn test_model(text: &str, cursor: usize) -> AppModel {
    let mut document = Document::with_text(text);
    document.set_cursor(cursor);
    AppModel::with_document(document, EditorConfig::default())
}

/// Create a test model with custom configuration
pub fn test_model_with_config(text: &str, cursor: usize, config: EditorConfig) -> AppModel {
    let mut document = Document::with_text(text);
    document.set_cursor(cursor);
    document.set_history_limit(config.history_limit);
    AppModel::with_document(document, config)
}

/// Create an app (model plus runtime) around a fresh untitled document
pub fn test_app() -> App {
    App::new(AppModel::default())
}

/// Create an app whose single document was loaded from `path`
pub fn test_app_with_file(path: &Path) -> App {
    let mut app = test_app();
    app.dispatch(Msg::open(path));
    app
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document().buffer.to_string()
}

/// Type `text` into the active document as one edit
pub fn type_text(model: &mut AppModel, text: &str) -> Option<Cmd> {
    update(model, Msg::Document(DocumentMsg::InsertText(text.to_string())))
}

/// Type `text` into the active document through the runtime
pub fn app_type(app: &mut App, text: &str) {
    app.dispatch(Msg::insert(text));
}
