use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// File name with the extension stripped.
    pub name: String,
    /// Contents at load time; not kept in sync with the file.
    pub body: String,
    pub modified: SystemTime,
}

/// Scan `dir` (non-recursively) for notes ending in `extension`, newest first.
///
/// Hidden files, directories and names without the suffix are skipped. Any
/// matched file that cannot be stat'ed or read fails the whole load.
pub fn load_notes(dir: &Path, extension: &str) -> Result<Vec<Note>> {
    let mut notes = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if file_name.starts_with('.') || file_name.len() <= extension.len() {
            continue;
        }
        let Some(name) = file_name.strip_suffix(extension) else {
            continue;
        };

        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|source| AppError::Note {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().map_err(|source| AppError::Note {
            path: path.clone(),
            source,
        })?;
        let bytes = fs::read(&path).map_err(|source| AppError::Note {
            path: path.clone(),
            source,
        })?;

        notes.push(Note {
            name: name.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
            modified,
        });
    }

    // Stable: equal timestamps keep enumeration order.
    notes.sort_by(|a, b| b.modified.cmp(&a.modified));

    tracing::info!(count = notes.len(), extension, "loaded notes");
    Ok(notes)
}
