use crate::app::{Action, App, Outcome};
use crate::config::Config;
use crate::editor::{Editor, ExternalEditor};
use crate::error::Result;
use crate::input::{EventQueue, InputReader};
use crate::terminal::{Screen, Tui};
use crate::ui;

/// Run one interactive session until the user quits or something fails.
pub fn run_app(config: &Config) -> Result<()> {
    let mut tui = Tui::enter()?;
    let mut input = InputReader::spawn()?;
    let mut editor = ExternalEditor::new(&config.editor);

    let mut app = App::new(&config.notes_dir, &config.extension, tui.size()?);
    app.reload()?;
    tracing::info!(extension = %config.extension, editor = %config.editor, "session started");

    run_loop(&mut app, &mut tui, &mut input, &mut editor)?;

    tracing::info!("session ended");
    Ok(())
}

/// Draw, wait for an event, apply it; until the session quits. Any error
/// ends the session.
pub fn run_loop<S, Q, E>(app: &mut App, screen: &mut S, events: &mut Q, editor: &mut E) -> Result<()>
where
    S: Screen,
    Q: EventQueue,
    E: Editor,
{
    loop {
        screen.draw(|f| ui::draw(f, app))?;

        let event = events.next_event()?;
        let Some(action) = Action::from_event(&event) else {
            continue;
        };

        match app.apply(action) {
            Outcome::Continue => {}
            Outcome::Quit => return Ok(()),
            Outcome::Edit(file_name) => {
                events.pause()?;
                screen.suspend()?;

                editor.edit(app.notes_dir(), &file_name)?;

                screen.resume()?;
                events.resume()?;
                app.session.resize(screen.size()?);
                app.reload()?;
            }
        }
    }
}
