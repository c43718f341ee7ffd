use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;

/// The commands a session understands. Anything else from the terminal is
/// dropped before it reaches the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    /// Select the whole query so the next character replaces it.
    SelectQuery,
    /// Leave the query selection without touching its text.
    DeselectQuery,
    Previous,
    Next,
    Confirm,
    Quit,
    Resize(Size),
}

impl Action {
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(width, height) => Some(Action::Resize(Size::new(*width, *height))),
            _ => None,
        }
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'q' | 'g' => Some(Action::Quit),
                'l' => Some(Action::SelectQuery),
                'k' | 'p' => Some(Action::Previous),
                'j' | 'n' => Some(Action::Next),
                _ => None,
            },
            // Alt is ignored, so Alt+f types an f.
            KeyCode::Char(c) => Some(Action::Insert(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Right => Some(Action::DeselectQuery),
            KeyCode::Up => Some(Action::Previous),
            KeyCode::Down => Some(Action::Next),
            _ => None,
        }
    }
}
