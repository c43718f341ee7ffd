use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Size, Frame, Terminal};

/// What the session loop needs from the terminal.
pub trait Screen {
    fn size(&self) -> io::Result<Size>;
    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame);
    /// Hand the terminal to another program.
    fn suspend(&mut self) -> io::Result<()>;
    /// Take the terminal back after [`suspend`](Screen::suspend) and start
    /// from a blank screen.
    fn resume(&mut self) -> io::Result<()>;
}

/// Raw mode plus the alternate screen, held for as long as the UI is shown.
/// Dropping the guard gives the terminal back, including during unwinding.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    pub fn enter() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut tui = Self {
            terminal,
            active: false,
        };
        tui.acquire()?;
        Ok(tui)
    }

    fn acquire(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // From here on a failure must still undo raw mode.
        self.active = true;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }
}

impl Screen for Tui {
    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore()
    }

    fn resume(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }
        self.acquire()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = restore();
        }
    }
}

/// Leave the alternate screen, disable raw mode and show the cursor.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed, so it
/// does not land on the alternate screen in raw mode.
pub fn install_panic_hook() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        tracing::error!("panic: {}", info);
        hook(info);
    }));
}
