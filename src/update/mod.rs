//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. No I/O happens
//! here; file access is requested through the returned `Cmd`.

mod app;
mod document;
mod find;
mod tabs;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{run_pending_action, update_app};
pub use document::update_document;
pub use find::update_find;
pub use tabs::update_tabs;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Tab(m) => tabs::update_tabs(model, m),
        Msg::Find(m) => find::update_find(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StateSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }

    model.registry.assert_invariants();
    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Document::InsertText("x")`
/// - `Tab::Next`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Tab(m) => format!("Tab::{:?}", m),
        Msg::Find(m) => format!("Find::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
