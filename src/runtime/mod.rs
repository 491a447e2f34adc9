//! Runtime module - drives the update loop
//!
//! - `app` - owns the model, executes commands and feeds their results back

pub mod app;

pub use app::{App, Flow};
