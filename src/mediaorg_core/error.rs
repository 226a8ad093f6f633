use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizerError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("{} is not a valid {role} directory.", path.display())]
    NotADirectory { role: &'static str, path: PathBuf },

    // Metadata errors
    #[error("Exiftool error: {0}")]
    Exiftool(String),

    #[error("Failed to extract metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },

    #[error("Invalid {field} value '{value}': {reason}")]
    InvalidDateFormat {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),

    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),

    // Argument errors
    #[error("{0}")]
    Argument(String),
}

/// Result type for mediaorg operations.
pub type Result<T> = std::result::Result<T, OrganizerError>;
