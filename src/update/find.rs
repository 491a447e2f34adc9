//! Find/replace message handlers

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::AppModel;

/// Handle find/replace messages against the active document
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::SetQuery(query) => {
            model.find.set_query(query);
        }

        FindMsg::SetReplacement(replacement) => {
            model.find.set_replacement(replacement);
        }

        FindMsg::ToggleCaseSensitive => {
            let options = &mut model.find.options;
            options.case_sensitive = !options.case_sensitive;
            let state = on_off(options.case_sensitive);
            model.ui.set_status(format!("Case sensitive: {}", state));
        }

        FindMsg::ToggleWholeWord => {
            let options = &mut model.find.options;
            options.whole_word = !options.whole_word;
            let state = on_off(options.whole_word);
            model.ui.set_status(format!("Whole word: {}", state));
        }

        FindMsg::ToggleRegex => {
            let options = &mut model.find.options;
            options.regex = !options.regex;
            let state = on_off(options.regex);
            model.ui.set_status(format!("Regular expression: {}", state));
        }

        FindMsg::FindNext => {
            let document = model.registry.active_mut();
            match model.find.find_next(document) {
                Ok(found) => {
                    let line = document.buffer.char_to_line(found.start);
                    let col = found.start - document.buffer.line_to_char(line);
                    model.ui.set_status(format!(
                        "Found '{}' at Ln {} Col {}",
                        model.find.query,
                        line + 1,
                        col + 1
                    ));
                }
                Err(e) => model.ui.show_error(e.to_string()),
            }
        }

        FindMsg::ReplaceAll => {
            let document = model.registry.active_mut();
            match model.find.replace_all(document) {
                Ok(outcome) => {
                    if outcome.cursor_restored {
                        model
                            .ui
                            .set_status(format!("Replaced {} occurrence(s)", outcome.replacements));
                    } else {
                        tracing::warn!("cursor position no longer valid after replace");
                        model.ui.show_error(format!(
                            "Replaced {} occurrence(s); cursor moved to end of text",
                            outcome.replacements
                        ));
                    }
                }
                Err(e) => model.ui.show_error(e.to_string()),
            }
        }
    }
    Some(Cmd::None)
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
