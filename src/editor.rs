use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{AppError, Result};

/// Edits one note while the session is suspended.
pub trait Editor {
    fn edit(&mut self, dir: &Path, file_name: &str) -> Result<()>;
}

/// The user's `$EDITOR`, run as a child process on the session's terminal.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for ExternalEditor {
    fn edit(&mut self, dir: &Path, file_name: &str) -> Result<()> {
        let status = open_in_editor(&self.command, dir, file_name)?;
        tracing::info!(file = file_name, %status, "editor exited");
        Ok(())
    }
}

/// Build the command for `editor` opening `file_name` inside `dir`.
///
/// `editor` may carry its own arguments (`"code -w"`); they go before the
/// file name.
pub fn editor_command(editor: &str, dir: &Path, file_name: &str) -> Result<Command> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| AppError::Runtime("empty editor command".into()))?;

    let mut command = Command::new(program);
    command.args(words).arg(file_name).current_dir(dir);
    Ok(command)
}

/// Run the editor on the caller's terminal and wait for it to exit. The exit
/// status is returned for logging only; a non-zero status is not an error.
pub fn open_in_editor(editor: &str, dir: &Path, file_name: &str) -> Result<ExitStatus> {
    let mut command = editor_command(editor, dir, file_name)?;
    tracing::info!(editor, file = file_name, "launching editor");

    // stdin/stdout/stderr are inherited by default for `status()`.
    command.status().map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AppError::EditorNotFound {
            editor: editor.to_string(),
        },
        _ => AppError::Editor {
            editor: editor.to_string(),
            source,
        },
    })
}
