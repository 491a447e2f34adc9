//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening several files, one tab each
//! - `file://` URIs as produced by file managers
//! - A base directory for relative paths

use clap::Parser;
use std::path::{Path, PathBuf};
use url::Url;

/// A small tabbed text editor
#[derive(Parser, Debug)]
#[command(name = "epad", version, about = "A small tabbed text editor")]
pub struct CliArgs {
    /// Files or file:// URIs to open
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    /// Resolve relative paths against DIR instead of the current directory
    #[arg(short = 'd', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Files to open, in order
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(dir) = &self.directory {
            if !dir.is_dir() {
                return Err(format!("Not a directory: {}", dir.display()));
            }
        }

        let files = self
            .paths
            .iter()
            .map(|arg| resolve_path(arg, self.directory.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StartupConfig { files })
    }
}

/// Turn a path argument or `file://` URI into a local path
fn resolve_path(arg: &str, base: Option<&Path>) -> Result<PathBuf, String> {
    let path = if arg.starts_with("file://") {
        Url::parse(arg)
            .map_err(|e| format!("Invalid file URI {}: {}", arg, e))?
            .to_file_path()
            .map_err(|_| format!("Unsupported file URI: {}", arg))?
    } else {
        PathBuf::from(arg)
    };

    match base {
        Some(dir) if path.is_relative() => Ok(dir.join(path)),
        _ => Ok(path),
    }
}
