//! Utility modules

pub mod file_validation;

pub use file_validation::{
    filename_for_display, read_text_file, validate_file_for_opening, write_text_file, FileError,
};
