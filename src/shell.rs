//! Line-oriented command shell
//!
//! Each input line is either a `:command` or text to insert into the active
//! document. Lines beginning with `::` insert text that starts with a colon.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::messages::{AppMsg, DocumentMsg, FindMsg, Msg, TabMsg};
use crate::model::{AppModel, ConfirmChoice};
use crate::runtime::{App, Flow};

pub const HELP: &str = "\
Commands:
  :new                 new document
  :open PATH           open a file
  :save                save the active document
  :saveas PATH         save under a new path
  :close [N]           close the active tab, or tab N
  :tab N  :next  :prev switch tabs
  :undo  :redo         step through history
  :goto OFFSET         move the cursor to a char offset
  :ins TEXT            insert TEXT without a newline
  :nl  :del  :fdel     newline, delete backward, delete forward
  :find [TEXT]         find next match (setting the query if given)
  :replace WITH        set the replacement text
  :replaceall          replace every match
  :case  :word  :regex toggle search options
  :yes  :no  :cancel   answer the save prompt
  :print  :tabs        show the document or the tab bar
  :quit                exit
Any other line is inserted followed by a newline.";

/// One parsed shell line
#[derive(Debug)]
pub enum ShellInput {
    Msgs(Vec<Msg>),
    Print,
    Tabs,
    Help,
    Empty,
    Invalid(String),
}

/// Parse a line of input against the current model
pub fn parse_line(line: &str, model: &AppModel) -> ShellInput {
    if line.is_empty() {
        return ShellInput::Empty;
    }

    if let Some(literal) = line.strip_prefix("::") {
        return one(Msg::insert(format!(":{}\n", literal)));
    }

    let Some(command) = line.strip_prefix(':') else {
        return one(Msg::insert(format!("{}\n", line)));
    };

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (command, ""),
    };

    match (name, arg) {
        ("new", "") => one(Msg::App(AppMsg::NewFile)),
        ("open", path) if !path.is_empty() => one(Msg::open(path)),
        ("save", "") => one(Msg::App(AppMsg::SaveFile)),
        ("saveas", path) if !path.is_empty() => {
            one(Msg::App(AppMsg::SaveFileAs(PathBuf::from(path))))
        }
        ("close", "") => one(Msg::Tab(TabMsg::CloseActive)),
        ("close", n) => match tab_id(n, model) {
            Ok(id) => one(Msg::Tab(TabMsg::Close(id))),
            Err(e) => ShellInput::Invalid(e),
        },
        ("tab", n) => match parse_tab_number(n) {
            Ok(index) => one(Msg::Tab(TabMsg::SwitchToIndex(index))),
            Err(e) => ShellInput::Invalid(e),
        },
        ("next", "") => one(Msg::Tab(TabMsg::Next)),
        ("prev", "") => one(Msg::Tab(TabMsg::Prev)),
        ("undo", "") => one(Msg::Document(DocumentMsg::Undo)),
        ("redo", "") => one(Msg::Document(DocumentMsg::Redo)),
        ("goto", n) => match n.trim().parse::<usize>() {
            Ok(offset) => one(Msg::Document(DocumentMsg::SetCursor(offset))),
            Err(_) => ShellInput::Invalid(format!("Not an offset: '{}'", n)),
        },
        ("ins", text) => one(Msg::insert(text)),
        ("nl", "") => one(Msg::Document(DocumentMsg::InsertNewline)),
        ("del", "") => one(Msg::Document(DocumentMsg::DeleteBackward)),
        ("fdel", "") => one(Msg::Document(DocumentMsg::DeleteForward)),
        ("find", "") => one(Msg::Find(FindMsg::FindNext)),
        ("find", query) => ShellInput::Msgs(vec![
            Msg::Find(FindMsg::SetQuery(query.to_string())),
            Msg::Find(FindMsg::FindNext),
        ]),
        ("replace", with) => one(Msg::Find(FindMsg::SetReplacement(with.to_string()))),
        ("replaceall", "") => one(Msg::Find(FindMsg::ReplaceAll)),
        ("case", "") => one(Msg::Find(FindMsg::ToggleCaseSensitive)),
        ("word", "") => one(Msg::Find(FindMsg::ToggleWholeWord)),
        ("regex", "") => one(Msg::Find(FindMsg::ToggleRegex)),
        ("yes", "") => one(Msg::confirm(ConfirmChoice::Save)),
        ("no", "") => one(Msg::confirm(ConfirmChoice::Discard)),
        ("cancel", "") => one(Msg::confirm(ConfirmChoice::Cancel)),
        ("print", "") => ShellInput::Print,
        ("tabs", "") => ShellInput::Tabs,
        ("help", "") => ShellInput::Help,
        ("quit", "") | ("q", "") => one(Msg::App(AppMsg::Quit)),
        _ => ShellInput::Invalid(format!("Unknown command ':{}' (try :help)", command)),
    }
}

fn one(msg: Msg) -> ShellInput {
    ShellInput::Msgs(vec![msg])
}

/// Parse a 1-based tab number into a 0-based index
fn parse_tab_number(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Not a tab number: '{}'", arg)),
    }
}

fn tab_id(arg: &str, model: &AppModel) -> Result<crate::model::DocumentId, String> {
    let index = parse_tab_number(arg)?;
    model
        .registry
        .iter()
        .nth(index)
        .and_then(|doc| doc.id)
        .ok_or_else(|| format!("No tab {}", index + 1))
}

/// Tab bar, e.g. `[1: notes.txt*] 2: Untitled`
pub fn render_tabs(model: &AppModel) -> String {
    let active = model.registry.active_index();
    model
        .registry
        .tab_labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            if i == active {
                format!("[{}: {}]", i + 1, label)
            } else {
                format!("{}: {}", i + 1, label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Active document with line numbers and a cursor marker
pub fn render_document(model: &AppModel) -> String {
    let doc = model.document();
    let (cursor_line, cursor_col) = doc.cursor_line_col();
    let mut out = String::new();
    for (i, line) in doc.buffer.lines().enumerate() {
        let text = line.to_string();
        let text = text.trim_end_matches(['\n', '\r']);
        if i + 1 == cursor_line {
            let split = text
                .char_indices()
                .nth(cursor_col - 1)
                .map(|(b, _)| b)
                .unwrap_or(text.len());
            out.push_str(&format!(
                "{:>4} | {}|{}\n",
                i + 1,
                &text[..split],
                &text[split..]
            ));
        } else {
            out.push_str(&format!("{:>4} | {}\n", i + 1, text));
        }
    }
    out
}

/// Title, status line and position label
pub fn render_status(model: &AppModel) -> String {
    let mut out = format!("-- {} -- {}", model.title(), model.ui.status_message);
    if model.config.show_position {
        out.push_str(&format!(" ({})", model.document().position_label()));
    }
    out
}

/// Read commands from `input` until EOF or quit
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_tabs(app.model()))?;
    writeln!(out, "{}", render_status(app.model()))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        let mut flow = Flow::Continue;
        match parse_line(line, app.model()) {
            ShellInput::Msgs(msgs) => {
                for msg in msgs {
                    flow = app.dispatch(msg);
                    if flow == Flow::Quit {
                        break;
                    }
                }
            }
            ShellInput::Print => write!(out, "{}", render_document(app.model()))?,
            ShellInput::Tabs => writeln!(out, "{}", render_tabs(app.model()))?,
            ShellInput::Help => writeln!(out, "{}", HELP)?,
            ShellInput::Empty => continue,
            ShellInput::Invalid(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        }

        if flow == Flow::Quit {
            return Ok(());
        }

        if let Some(error) = app.model_mut().ui.dismiss_error() {
            writeln!(out, "Error: {}", error)?;
        }
        if let Some(prompt) = &app.model().ui.prompt {
            writeln!(out, "{}", prompt)?;
        } else {
            writeln!(out, "{}", render_status(app.model()))?;
        }
    }

    if app.model().registry.any_modified() {
        tracing::warn!("Input closed with unsaved changes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(input: ShellInput) -> Vec<Msg> {
        match input {
            ShellInput::Msgs(msgs) => msgs,
            other => panic!("expected messages, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_line_inserts_with_newline() {
        let model = AppModel::default();
        let parsed = msgs(parse_line("hello", &model));
        assert!(matches!(
            &parsed[..],
            [Msg::Document(DocumentMsg::InsertText(t))] if t == "hello\n"
        ));
    }

    #[test]
    fn test_double_colon_inserts_literal() {
        let model = AppModel::default();
        let parsed = msgs(parse_line("::quit", &model));
        assert!(matches!(
            &parsed[..],
            [Msg::Document(DocumentMsg::InsertText(t))] if t == ":quit\n"
        ));
    }

    #[test]
    fn test_find_with_query_sets_then_searches() {
        let model = AppModel::default();
        let parsed = msgs(parse_line(":find foo bar", &model));
        assert!(matches!(
            &parsed[..],
            [Msg::Find(FindMsg::SetQuery(q)), Msg::Find(FindMsg::FindNext)] if q == "foo bar"
        ));
    }

    #[test]
    fn test_close_by_number_resolves_document() {
        let model = AppModel::default();
        let id = model.registry.active_id();
        let parsed = msgs(parse_line(":close 1", &model));
        assert!(matches!(&parsed[..], [Msg::Tab(TabMsg::Close(got))] if *got == id));
        assert!(matches!(parse_line(":close 2", &model), ShellInput::Invalid(_)));
    }

    #[test]
    fn test_unknown_command() {
        let model = AppModel::default();
        assert!(matches!(parse_line(":bogus", &model), ShellInput::Invalid(_)));
        assert!(matches!(parse_line(":tab 0", &model), ShellInput::Invalid(_)));
    }

    #[test]
    fn test_render_document_marks_cursor() {
        let mut model = AppModel::default();
        model.document_mut().insert_text("ab\ncd");
        model.document_mut().set_cursor(4);
        let rendered = render_document(&model);
        assert_eq!(rendered, "   1 | ab\n   2 | c|d\n");
    }

    #[test]
    fn test_run_session_to_quit() {
        let mut app = App::new(AppModel::default());
        let input = b"first line\n:print\n:quit\n:no\nnever inserted\n" as &[u8];
        let mut out = Vec::new();
        run(&mut app, input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("   1 | first line"));
        assert!(text.contains("Save changes to 'Untitled'?"));
        assert_eq!(app.model().document().text(), "first line\n");
    }
}
