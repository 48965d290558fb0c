//! Error handling for Soundbank
//!
//! One error enum covers the whole pipeline: manifest shape failures,
//! transport failures during load, and fatal enrichment failures. Per-entry
//! problems (invalid entries, duplicate ids) are never errors; they are
//! dropped with a diagnostic and processing continues.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Soundbank operations
pub type Result<T> = std::result::Result<T, SoundbankError>;

/// Main error type for Soundbank operations
#[derive(Error, Debug)]
pub enum SoundbankError {
    // Manifest Shape Errors
    #[error("Manifest payload is not an object")]
    NotAnObject,

    #[error("Manifest does not include any playable files")]
    NoPlayableFiles,

    // Transport Errors
    #[error("Manifest request failed ({status})")]
    RequestFailed { status: u16 },

    #[error("Manifest transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // Enrichment Errors
    #[error("Manifest has no files array: {}", path.display())]
    MissingFilesArray { path: PathBuf },

    #[error("Duplicate emojis found: {}", duplicates.join(", "))]
    DuplicateEmojis { duplicates: Vec<String> },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SoundbankError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SoundbankError::NotAnObject => "NOT_AN_OBJECT",
            SoundbankError::NoPlayableFiles => "NO_PLAYABLE_FILES",
            SoundbankError::RequestFailed { .. } => "REQUEST_FAILED",
            SoundbankError::Transport(_) => "TRANSPORT_ERROR",
            SoundbankError::MissingFilesArray { .. } => "MISSING_FILES_ARRAY",
            SoundbankError::DuplicateEmojis { .. } => "DUPLICATE_EMOJIS",
            SoundbankError::Io(_) => "IO_ERROR",
            SoundbankError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is a manifest shape violation
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SoundbankError::NotAnObject | SoundbankError::NoPlayableFiles
        )
    }

    /// Check if this error originated in the fetch transport
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            SoundbankError::RequestFailed { .. } | SoundbankError::Transport(_)
        )
    }
}
