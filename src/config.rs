use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Parser, Debug)]
#[command(name = "nvterm", version)]
#[command(about = "Browse, filter and edit the notes in the current directory", long_about = None)]
pub struct Cli {
    /// Note file extension, without the leading dot
    #[arg(default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

/// `--help` and `--version` are not failures; every other parse error is.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Suffix including the leading dot, e.g. `.md`.
    pub extension: String,
    pub editor: String,
    pub notes_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(&cli.extension, std::env::var("EDITOR").ok())
    }

    pub fn resolve(extension: &str, editor: Option<String>) -> Self {
        let extension = extension.trim_start_matches('.');
        let extension = if extension.is_empty() {
            DEFAULT_EXTENSION
        } else {
            extension
        };

        let editor = editor
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self {
            extension: format!(".{}", extension),
            editor,
            notes_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(DEFAULT_EXTENSION, None);
        assert_eq!(config.extension, ".md");
        assert_eq!(config.editor, "vim");
        assert_eq!(config.notes_dir, PathBuf::from("."));
    }

    #[test]
    fn test_extension_gets_leading_dot() {
        assert_eq!(Config::resolve("txt", None).extension, ".txt");
        assert_eq!(Config::resolve(".txt", None).extension, ".txt");
        assert_eq!(Config::resolve("", None).extension, ".md");
    }

    #[test]
    fn test_blank_editor_falls_back() {
        assert_eq!(Config::resolve("md", Some(String::new())).editor, "vim");
        assert_eq!(Config::resolve("md", Some("  ".into())).editor, "vim");
        assert_eq!(Config::resolve("md", Some("nano".into())).editor, "nano");
    }

    #[test]
    fn test_cli_positional_extension() {
        let cli = Cli::try_parse_from(["nvterm", "org"]).unwrap();
        assert_eq!(cli.extension, "org");

        let cli = Cli::try_parse_from(["nvterm"]).unwrap();
        assert_eq!(cli.extension, "md");

        assert!(Cli::try_parse_from(["nvterm", "md", "txt"]).is_err());
    }

    #[test]
    fn test_extra_argument_is_a_failure() {
        let err = Cli::try_parse_from(["nvterm", "md", "txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(!is_informational(&err));
    }

    #[test]
    fn test_help_and_version_are_informational() {
        let err = Cli::try_parse_from(["nvterm", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(is_informational(&err));

        let err = Cli::try_parse_from(["nvterm", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(is_informational(&err));
    }
}
