mod actions;
mod state;

use std::path::{Path, PathBuf};

use ratatui::layout::Size;

pub use actions::Action;
pub use state::{Focus, Session};

use crate::error::Result;
use crate::notes::{load_notes, Note};
use crate::search::{filter_notes, ResultList};

/// What the event loop has to do after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Suspend the UI and edit this file (relative to the notes directory).
    Edit(String),
}

/// The whole session: interaction state, the loaded notes and the results of
/// the current query over them.
pub struct App {
    pub session: Session,
    notes_dir: PathBuf,
    notes: Vec<Note>,
    results: ResultList,
}

impl App {
    pub fn new(notes_dir: impl Into<PathBuf>, extension: impl Into<String>, viewport: Size) -> Self {
        Self {
            session: Session::new(extension, viewport),
            notes_dir: notes_dir.into(),
            notes: Vec::new(),
            results: ResultList::default(),
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// Replace the note set from disk and refilter with the current query.
    pub fn reload(&mut self) -> Result<()> {
        let notes = load_notes(&self.notes_dir, self.session.extension())?;
        self.set_notes(notes);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.results = filter_notes(&self.notes, self.session.query());
        self.session.clamp_selection(self.results.len());
        if self.results.is_empty() {
            tracing::debug!(query = self.session.query(), "no matching notes");
        } else {
            tracing::debug!(
                query = self.session.query(),
                matches = self.results.len(),
                "filtered notes"
            );
        }
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let position = self.session.selected()?;
        self.results.get(position).and_then(|i| self.notes.get(i))
    }

    /// `<name><extension>` of the selected note, or of the typed query when
    /// nothing is selected.
    pub fn target_file_name(&self) -> String {
        let identifier = match self.selected_note() {
            Some(note) => note.name.as_str(),
            None => self.session.query(),
        };
        format!("{}{}", identifier, self.session.extension())
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Insert(c) => {
                self.session.insert_char(c);
                self.refilter();
            }
            Action::Backspace => {
                self.session.backspace();
                self.refilter();
            }
            Action::SelectQuery => self.session.select_query(),
            Action::DeselectQuery => self.session.deselect_query(),
            Action::Previous => self.session.select_previous(),
            Action::Next => self.session.select_next(self.results.len()),
            Action::Resize(size) => self.session.resize(size),
            Action::Quit => return Outcome::Quit,
            Action::Confirm => {
                if self.session.selected().is_none() && self.session.query().is_empty() {
                    return Outcome::Continue;
                }
                return Outcome::Edit(self.target_file_name());
            }
        }
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    fn note(name: &str, body: &str, age_secs: u64) -> Note {
        Note {
            name: name.to_string(),
            body: body.to_string(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(10_000 - age_secs),
        }
    }

    fn app() -> App {
        let mut app = App::new(".", ".md", Size::new(80, 24));
        app.set_notes(vec![
            note("a", "hello world", 1),
            note("b", "goodbye", 2),
            note("c", "see you", 3),
        ]);
        app
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Action::Insert(c));
        }
    }

    fn result_names(app: &App) -> Vec<&str> {
        app.results()
            .iter()
            .map(|i| app.notes()[i].name.as_str())
            .collect()
    }

    #[test]
    fn test_loading_selects_first_result() {
        let app = app();
        assert_eq!(app.results().len(), 3);
        assert_eq!(app.session.selected(), Some(0));
        assert_eq!(app.selected_note().map(|n| n.name.as_str()), Some("a"));
    }

    #[test]
    fn test_typing_filters() {
        let mut app = app();
        type_str(&mut app, "hello");
        assert_eq!(result_names(&app), vec!["a"]);

        for _ in 0..5 {
            app.apply(Action::Backspace);
        }
        assert_eq!(result_names(&app), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_selection_clamped_when_results_shrink() {
        let mut app = app();
        app.apply(Action::Next);
        app.apply(Action::Next);
        assert_eq!(app.session.selected(), Some(2));

        type_str(&mut app, "o");
        // "o" matches all three: a (hello world), b (goodbye), c (see you).
        assert_eq!(app.session.selected(), Some(2));

        type_str(&mut app, "od");
        assert_eq!(result_names(&app), vec!["b"]);
        assert_eq!(app.session.selected(), Some(0));

        type_str(&mut app, "xyz");
        assert!(app.results().is_empty());
        assert_eq!(app.session.selected(), None);
        assert!(app.selected_note().is_none());
    }

    #[test]
    fn test_select_query_then_type_replaces() {
        let mut app = app();
        type_str(&mut app, "foo");
        app.apply(Action::SelectQuery);
        assert_eq!(app.session.focus(), Focus::QuerySelected);

        app.apply(Action::Insert('b'));
        assert_eq!(app.session.query(), "b");
        assert_eq!(app.session.focus(), Focus::EditingQuery);
        assert_eq!(result_names(&app), vec!["b"]);
    }

    #[test]
    fn test_confirm_opens_selected_note() {
        let mut app = app();
        app.apply(Action::Next);
        assert_eq!(app.apply(Action::Confirm), Outcome::Edit("b.md".into()));
    }

    #[test]
    fn test_confirm_without_selection_uses_query() {
        let mut app = app();
        type_str(&mut app, "todo");
        assert_eq!(app.session.selected(), None);
        assert_eq!(app.apply(Action::Confirm), Outcome::Edit("todo.md".into()));
    }

    #[test]
    fn test_confirm_after_deselecting_uses_query() {
        let mut app = app();
        type_str(&mut app, "hello");
        app.apply(Action::Previous);
        assert_eq!(app.session.selected(), None);
        assert_eq!(app.apply(Action::Confirm), Outcome::Edit("hello.md".into()));
    }

    #[test]
    fn test_confirm_with_nothing_is_ignored() {
        let mut app = App::new(".", ".md", Size::new(80, 24));
        assert_eq!(app.apply(Action::Confirm), Outcome::Continue);
    }

    #[test]
    fn test_backspace_on_empty_query_restores_default_selection() {
        let mut app = app();
        app.apply(Action::Previous);
        assert_eq!(app.session.selected(), None);

        app.apply(Action::Backspace);
        assert_eq!(app.session.query(), "");
        assert_eq!(app.session.selected(), Some(0));
    }

    #[test]
    fn test_quit_and_resize() {
        let mut app = app();
        assert_eq!(app.apply(Action::Resize(Size::new(10, 5))), Outcome::Continue);
        assert_eq!(app.session.viewport(), Size::new(10, 5));
        assert_eq!(app.apply(Action::Quit), Outcome::Quit);
    }

    #[test]
    fn test_reload_keeps_query() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("alpha.md"), "first").unwrap();

        let mut app = App::new(dir.path(), ".md", Size::new(80, 24));
        app.reload().unwrap();
        type_str(&mut app, "beta");
        assert!(app.results().is_empty());

        std::fs::write(dir.path().join("beta.md"), "second").unwrap();
        app.reload().unwrap();
        assert_eq!(app.session.query(), "beta");
        assert_eq!(result_names(&app), vec!["beta"]);
        assert_eq!(app.session.selected(), Some(0));
    }
}
