//! File errors and pre-open validation
//!
//! Every I/O failure is turned into a `FileError` and shown to the user;
//! none of them end the process.

use std::fs;
use std::io;
use std::path::Path;

/// Errors that can occur when opening or saving a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// File does not exist (opening treats this as "create new file")
    NotFound,
    /// Permission denied to read or write the file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// Any other I/O error, with the OS message
    Io(String),
}

impl FileError {
    /// Classify an I/O error
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err.to_string()),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::Io(msg) => format!("Error accessing {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        Self::from_io(&err)
    }
}

/// Validate a path before reading it
///
/// Directories are rejected up front; on some platforms reading one yields a
/// generic error instead of `IsADirectory`.
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileError> {
    let metadata = fs::metadata(path).map_err(FileError::from)?;
    if metadata.is_dir() {
        return Err(FileError::IsDirectory);
    }
    Ok(())
}

/// Read a file as UTF-8 text
pub fn read_text_file(path: &Path) -> Result<String, FileError> {
    validate_file_for_opening(path)?;
    fs::read_to_string(path).map_err(FileError::from)
}

/// Write text verbatim to a file
pub fn write_text_file(path: &Path, content: &str) -> Result<(), FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory);
    }
    fs::write(path, content).map_err(FileError::from)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
