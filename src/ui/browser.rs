use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Session};
use crate::notes::Note;
use crate::search::ResultList;

const RULE: &str = "─";
const TAB_WIDTH: usize = 4;

pub fn draw(f: &mut Frame, app: &App) {
    let cursor = render(&app.session, app.notes(), app.results(), f.buffer_mut());
    f.set_cursor_position(cursor);
}

/// Paint the query line, the result list and the preview of the selected
/// note into `buf`, and return where the cursor belongs.
///
/// Layout (height `h`): query on row 0, rule on row 1, results from row 2
/// (at most `h/2 - 3` of them), rule on row `h/2`, preview below it.
pub fn render(session: &Session, notes: &[Note], results: &ResultList, buf: &mut Buffer) -> Position {
    buf.reset();

    let viewport = session.viewport();
    let area = buf
        .area
        .intersection(Rect::new(0, 0, viewport.width, viewport.height));
    if area.is_empty() {
        return Position::new(buf.area.x, buf.area.y);
    }

    let width = area.width as usize;
    let middle = area.height / 2;

    buf.set_stringn(area.x, area.y, session.query(), width, Style::default());

    if area.height > 1 {
        render_rule(buf, area, 1);
    }

    let list_rows = middle.saturating_sub(3) as usize;
    let selected_style = Style::default().add_modifier(Modifier::REVERSED);
    for (row, note) in results
        .iter()
        .filter_map(|i| notes.get(i))
        .take(list_rows)
        .enumerate()
    {
        let y = area.y + 2 + row as u16;
        let style = if session.selected() == Some(row) {
            buf.set_style(Rect::new(area.x, y, area.width, 1), selected_style);
            selected_style
        } else {
            Style::default()
        };
        buf.set_stringn(area.x, y, &note.name, width, style);
    }

    if middle > 1 {
        render_rule(buf, area, middle);
    }

    let preview = session
        .selected()
        .and_then(|position| results.get(position))
        .and_then(|i| notes.get(i));
    if let Some(note) = preview {
        let first = middle + 1;
        let rows = area.height.saturating_sub(first) as usize;
        for (i, line) in note.body.lines().take(rows).enumerate() {
            let line = line.replace('\t', &" ".repeat(TAB_WIDTH));
            buf.set_stringn(area.x, area.y + first + i as u16, line, width, Style::default());
        }
    }

    cursor_position(session, area)
}

fn render_rule(buf: &mut Buffer, area: Rect, row: u16) {
    buf.set_string(area.x, area.y + row, RULE.repeat(area.width as usize), Style::default());
}

fn cursor_position(session: &Session, area: Rect) -> Position {
    match session.focus() {
        Focus::QuerySelected => Position::new(area.x, area.y),
        Focus::EditingQuery => {
            let column = session.query().width().min(area.width as usize - 1);
            Position::new(area.x + column as u16, area.y)
        }
    }
}
