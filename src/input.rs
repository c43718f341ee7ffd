//! Background thread reading terminal events.
//!
//! One reader thread pulls events from crossterm and pushes them, in arrival
//! order, onto a bounded channel drained by the event loop. A full channel
//! blocks the reader. While an external editor owns the terminal the reader
//! is parked so it cannot swallow keystrokes meant for the editor.

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::error::{AppError, Result};

/// Events the reader may buffer ahead of the event loop.
pub const QUEUE_CAPACITY: usize = 512;

/// How often a reader waiting for input rechecks pause and shutdown requests.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Default)]
struct Control {
    pause: bool,
    parked: bool,
    shutdown: bool,
    finished: bool,
}

type Shared = Arc<(Mutex<Control>, Condvar)>;

/// Where the reader gets its events from.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for an event to become available.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

pub struct Crossterm;

impl EventSource for Crossterm {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// The event loop's view of its input: events in arrival order, and a way to
/// stop reading while another program owns the terminal.
pub trait EventQueue {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> Result<Event>;
    /// Stop reading and return once nothing touches the terminal anymore.
    fn pause(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
}

/// Handle to the reader thread, owned by the event loop.
pub struct InputReader {
    receiver: Receiver<io::Result<Event>>,
    backlog: VecDeque<io::Result<Event>>,
    control: Shared,
    #[allow(dead_code)]
    thread_handle: JoinHandle<()>,
}

impl InputReader {
    pub fn spawn() -> Result<Self> {
        Self::spawn_with(Crossterm)
    }

    pub fn spawn_with<S: EventSource>(source: S) -> Result<Self> {
        let (sender, receiver) = mpsc::sync_channel(QUEUE_CAPACITY);
        let control: Shared = Arc::new((Mutex::new(Control::default()), Condvar::new()));

        let thread_control = Arc::clone(&control);
        let thread_handle = thread::Builder::new()
            .name("input-reader".into())
            .spawn(move || reader_loop(source, sender, thread_control))?;

        Ok(Self {
            receiver,
            backlog: VecDeque::new(),
            control,
            thread_handle,
        })
    }
}

impl EventQueue for InputReader {
    fn next_event(&mut self) -> Result<Event> {
        let item = match self.backlog.pop_front() {
            Some(item) => item,
            None => self
                .receiver
                .recv()
                .map_err(|_| AppError::Runtime("input reader stopped".into()))?,
        };
        Ok(item?)
    }

    /// Events already queued are kept and delivered after
    /// [`resume`](EventQueue::resume).
    fn pause(&mut self) -> Result<()> {
        let (lock, condvar) = &*self.control;
        let mut control = lock.lock().map_err(|_| poisoned())?;
        control.pause = true;

        while !control.parked && !control.finished {
            // A reader blocked on a full queue can only park once there is
            // room, so keep draining while waiting.
            match self.receiver.try_recv() {
                Ok(item) => {
                    self.backlog.push_back(item);
                    continue;
                }
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }
            control = condvar.wait(control).map_err(|_| poisoned())?;
        }

        tracing::debug!(buffered = self.backlog.len(), "input reader paused");
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        let (lock, condvar) = &*self.control;
        let mut control = lock.lock().map_err(|_| poisoned())?;
        control.pause = false;
        condvar.notify_all();
        tracing::debug!("input reader resumed");
        Ok(())
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        let (lock, condvar) = &*self.control;
        if let Ok(mut control) = lock.lock() {
            control.shutdown = true;
            condvar.notify_all();
        }
    }
}

fn poisoned() -> AppError {
    AppError::Runtime("input reader control lock poisoned".into())
}

fn reader_loop<S: EventSource>(mut source: S, sender: SyncSender<io::Result<Event>>, control: Shared) {
    let (lock, condvar) = &*control;

    loop {
        {
            let Ok(mut state) = lock.lock() else {
                break;
            };
            if state.pause && !state.shutdown {
                state.parked = true;
                condvar.notify_all();
                while state.pause && !state.shutdown {
                    state = match condvar.wait(state) {
                        Ok(state) => state,
                        Err(_) => return,
                    };
                }
                state.parked = false;
            }
            if state.shutdown {
                break;
            }
        }

        let item = match source.poll(POLL_INTERVAL) {
            Ok(true) => source.read(),
            Ok(false) => continue,
            Err(err) => Err(err),
        };
        let failed = item.is_err();

        if sender.send(item).is_err() || failed {
            break;
        }
    }

    if let Ok(mut state) = lock.lock() {
        state.finished = true;
        condvar.notify_all();
    }
}
