//! ePad - Elm-style tabbed text editor
//!
//! This crate provides the core types and logic for a small tabbed text
//! editor implementing the Elm Architecture pattern, driven by a line shell.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod find;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod shell;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
