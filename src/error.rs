use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure that can end a session. None of them are recoverable: the
/// caller restores the terminal, prints the message and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Directory enumeration, terminal setup/teardown or input reading failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A matched note could not be read or stat'ed.
    #[error("failed to load note {}: {source}", .path.display())]
    Note {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("editor `{editor}` not found; set $EDITOR to an installed editor")]
    EditorNotFound { editor: String },

    #[error("failed to run editor `{editor}`: {source}")]
    Editor {
        editor: String,
        #[source]
        source: io::Error,
    },

    /// An internal invariant no longer holds.
    #[error("internal error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
