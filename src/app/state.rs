use ratatui::layout::Size;

/// Whether typing edits the query or replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    EditingQuery,
    /// The whole query is selected; the next character replaces it.
    QuerySelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    query: String,
    focus: Focus,
    /// Position in the current result list, `None` when nothing is selected.
    selected: Option<usize>,
    extension: String,
    viewport: Size,
}

impl Session {
    pub fn new(extension: impl Into<String>, viewport: Size) -> Self {
        Self {
            query: String::new(),
            focus: Focus::EditingQuery,
            selected: None,
            extension: extension.into(),
            viewport,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Type a character. Replaces the query first when it is selected.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == Focus::QuerySelected {
            self.query.clear();
            self.focus = Focus::EditingQuery;
        }
        self.query.push(c);
    }

    /// Drop the last character of the query. Returns false if it was empty.
    pub fn backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    pub fn select_query(&mut self) {
        self.focus = Focus::QuerySelected;
    }

    pub fn deselect_query(&mut self) {
        self.focus = Focus::EditingQuery;
    }

    /// Moving up from the first result clears the selection.
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_next(&mut self, result_len: usize) {
        if result_len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(result_len - 1),
        });
    }

    /// Re-establish the selection invariants after the result list changed:
    /// the index stays in bounds, and a non-empty list always has one.
    pub fn clamp_selection(&mut self, result_len: usize) {
        self.selected = match (self.selected, result_len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}
