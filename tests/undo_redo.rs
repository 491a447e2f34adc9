//! Undo/redo tests - snapshot history through the update loop

mod common;

use common::{buffer_to_string, test_model, test_model_with_config, type_text};
use epad::config::EditorConfig;
use epad::messages::{DocumentMsg, Msg};
use epad::update::update;

fn undo(model: &mut epad::AppModel) {
    update(model, Msg::Document(DocumentMsg::Undo));
}

fn redo(model: &mut epad::AppModel) {
    update(model, Msg::Document(DocumentMsg::Redo));
}

#[test]
fn test_undo_restores_previous_snapshot_exactly() {
    let mut model = test_model("", 0);
    type_text(&mut model, "one");
    type_text(&mut model, " two");
    type_text(&mut model, " three");

    undo(&mut model);
    assert_eq!(buffer_to_string(&model), "one two");
    assert_eq!(model.document().cursor, 7);

    undo(&mut model);
    assert_eq!(buffer_to_string(&model), "one");
}

#[test]
fn test_redo_restores_pre_undo_content() {
    let mut model = test_model("", 0);
    type_text(&mut model, "alpha");
    type_text(&mut model, " beta");

    undo(&mut model);
    redo(&mut model);

    assert_eq!(buffer_to_string(&model), "alpha beta");
    assert_eq!(model.document().cursor, 10);
}

#[test]
fn test_undo_on_fresh_document_reports_nothing() {
    let mut model = test_model("hello", 0);
    undo(&mut model);

    assert_eq!(buffer_to_string(&model), "hello");
    assert_eq!(model.ui.status_message, "Nothing to undo");
}

#[test]
fn test_redo_without_undo_reports_nothing() {
    let mut model = test_model("", 0);
    type_text(&mut model, "x");
    redo(&mut model);

    assert_eq!(buffer_to_string(&model), "x");
    assert_eq!(model.ui.status_message, "Nothing to redo");
}

#[test]
fn test_edit_after_undo_discards_redo_branch() {
    let mut model = test_model("", 0);
    type_text(&mut model, "A");
    type_text(&mut model, "B");
    type_text(&mut model, "C");

    undo(&mut model);
    assert_eq!(buffer_to_string(&model), "AB");

    type_text(&mut model, "D");
    assert_eq!(buffer_to_string(&model), "ABD");

    let history: Vec<String> = model
        .document()
        .history
        .iter()
        .map(|s| s.content.to_string())
        .collect();
    assert_eq!(history, vec!["", "A", "AB", "ABD"]);

    redo(&mut model);
    assert_eq!(buffer_to_string(&model), "ABD");
}

#[test]
fn test_history_is_capped_at_thirty() {
    let mut model = test_model("", 0);
    for _ in 0..40 {
        type_text(&mut model, "x");
    }

    let history = &model.document().history;
    assert_eq!(history.len(), 30);
    assert_eq!(history.index(), 29);

    // Oldest surviving snapshot holds 11 chars; the 10 before it were evicted
    let oldest = history.iter().next().unwrap();
    assert_eq!(oldest.content.len_chars(), 11);
}

#[test]
fn test_undo_stops_at_oldest_surviving_snapshot() {
    let mut model = test_model("", 0);
    for _ in 0..35 {
        type_text(&mut model, "x");
    }
    for _ in 0..50 {
        undo(&mut model);
    }
    assert_eq!(buffer_to_string(&model), "x".repeat(6));
}

#[test]
fn test_custom_history_limit_from_config() {
    let config = EditorConfig {
        history_limit: 3,
        ..EditorConfig::default()
    };
    let mut model = test_model_with_config("", 0, config);
    for c in ["a", "b", "c", "d", "e"] {
        type_text(&mut model, c);
    }
    assert_eq!(model.document().history.len(), 3);
}

#[test]
fn test_undo_back_to_saved_content_clears_dirty_flag() {
    let mut model = test_model("saved", 5);
    type_text(&mut model, "!");
    assert!(model.document().is_modified);

    undo(&mut model);
    assert!(!model.document().is_modified);
    assert_eq!(model.title(), "Untitled - ePad");
}

#[test]
fn test_delete_backward_is_undoable() {
    let mut model = test_model("abc", 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
    assert_eq!(buffer_to_string(&model), "ab");

    undo(&mut model);
    assert_eq!(buffer_to_string(&model), "abc");
}
