//! Find/replace tests through the update loop

mod common;

use common::{buffer_to_string, test_model, test_model_with_config};
use epad::config::EditorConfig;
use epad::messages::{DocumentMsg, FindMsg, Msg};
use epad::model::AppModel;
use epad::update::update;

fn find(model: &mut AppModel, query: &str) {
    update(model, Msg::Find(FindMsg::SetQuery(query.to_string())));
    update(model, Msg::Find(FindMsg::FindNext));
}

fn replace_all(model: &mut AppModel, query: &str, with: &str) {
    update(model, Msg::Find(FindMsg::SetQuery(query.to_string())));
    update(model, Msg::Find(FindMsg::SetReplacement(with.to_string())));
    update(model, Msg::Find(FindMsg::ReplaceAll));
}

#[test]
fn test_find_next_moves_cursor_and_reports_position() {
    let mut model = test_model("one\ntwo one\n", 0);
    find(&mut model, "one");

    assert_eq!(model.document().cursor, 3);
    assert_eq!(model.ui.status_message, "Found 'one' at Ln 1 Col 1");

    update(&mut model, Msg::Find(FindMsg::FindNext));
    assert_eq!(model.document().cursor, 11);
    assert_eq!(model.ui.status_message, "Found 'one' at Ln 2 Col 5");
}

#[test]
fn test_find_next_wraps_to_first_match() {
    let mut model = test_model("cat dog cat", 0);
    find(&mut model, "cat");
    update(&mut model, Msg::Find(FindMsg::FindNext));
    update(&mut model, Msg::Find(FindMsg::FindNext));

    assert_eq!(model.document().cursor, 3);
}

#[test]
fn test_find_starts_from_cursor() {
    let mut model = test_model("cat dog cat", 5);
    find(&mut model, "cat");
    assert_eq!(model.document().cursor, 11);
}

#[test]
fn test_find_with_no_match_shows_error() {
    let mut model = test_model("hello", 0);
    find(&mut model, "zzz");

    assert!(model.ui.error.is_some());
    assert_eq!(model.document().cursor, 0);
}

#[test]
fn test_case_toggle_changes_matching() {
    let mut model = test_model("Hello hello", 0);
    find(&mut model, "HELLO");
    assert!(model.ui.error.is_some());

    update(&mut model, Msg::Find(FindMsg::ToggleCaseSensitive));
    assert_eq!(model.ui.status_message, "Case sensitive: off");
    update(&mut model, Msg::Find(FindMsg::FindNext));
    assert_eq!(model.document().cursor, 5);
}

#[test]
fn test_whole_word_skips_partial_matches() {
    let mut model = test_model("category cat", 0);
    update(&mut model, Msg::Find(FindMsg::ToggleWholeWord));
    find(&mut model, "cat");

    assert_eq!(model.document().cursor, 12);
}

#[test]
fn test_replace_all_is_a_single_undo_step() {
    let mut model = test_model("a-b-c", 0);
    replace_all(&mut model, "-", "+");

    assert_eq!(buffer_to_string(&model), "a+b+c");
    assert_eq!(model.ui.status_message, "Replaced 2 occurrence(s)");
    assert!(model.document().is_modified);

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(buffer_to_string(&model), "a-b-c");
}

#[test]
fn test_replace_all_literal_does_not_expand_groups() {
    let mut model = test_model("x.y", 0);
    replace_all(&mut model, ".", "$0");
    assert_eq!(buffer_to_string(&model), "x$0y");
}

#[test]
fn test_replace_all_regex_uses_captures() {
    let config = EditorConfig {
        regex_search: true,
        ..EditorConfig::default()
    };
    let mut model = test_model_with_config("2024-01-31", 0, config);
    replace_all(&mut model, r"(\d+)-(\d+)-(\d+)", "$3/$2/$1");
    assert_eq!(buffer_to_string(&model), "31/01/2024");
}

#[test]
fn test_replace_all_regex_count_matches_text() {
    let config = EditorConfig {
        regex_search: true,
        ..EditorConfig::default()
    };
    let mut model = test_model_with_config("xab", 0, config);
    replace_all(&mut model, "x*", "Y");

    assert_eq!(buffer_to_string(&model), "Yab");
    assert_eq!(model.ui.status_message, "Replaced 1 occurrence(s)");
}

#[test]
fn test_whole_word_query_with_leading_dash() {
    let mut model = test_model("a -x b", 0);
    update(&mut model, Msg::Find(FindMsg::ToggleWholeWord));
    find(&mut model, "-x");

    assert!(model.ui.error.is_none());
    assert_eq!(model.document().cursor, 4);
}

#[test]
fn test_replace_all_requires_replacement_text() {
    let mut model = test_model("abc", 0);
    replace_all(&mut model, "b", "");

    assert_eq!(buffer_to_string(&model), "abc");
    assert!(model.ui.error.is_some());
}

#[test]
fn test_replace_all_reports_clamped_cursor() {
    let mut model = test_model("aaaa", 4);
    replace_all(&mut model, "aa", "b");

    assert_eq!(buffer_to_string(&model), "bb");
    assert_eq!(model.document().cursor, 2);
    assert!(model.ui.error.is_some());
}

#[test]
fn test_invalid_regex_is_reported() {
    let mut model = test_model("abc", 0);
    update(&mut model, Msg::Find(FindMsg::ToggleRegex));
    find(&mut model, "(");

    let error = model.ui.error.clone().unwrap();
    assert!(error.starts_with("Invalid search pattern"));
}
