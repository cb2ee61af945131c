//! Ctrl-C handling for the console.
//!
//! Stdin is read on its own thread and forwarded over a channel. A second
//! thread waits for Ctrl-C, marks the [`CancelToken`] and wakes the channel,
//! so a game blocked on input still gets to print its farewell.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use tokio::runtime;
use tracing::{debug, warn};

/// Shared flag raised when the player interrupts the game.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A source of answer lines. `Ok(None)` is end of input.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

enum ConsoleEvent {
    Line(String),
    Eof,
    Failed(io::Error),
    Interrupt,
}

/// Stdin lines delivered from the reader thread.
///
/// An interrupt surfaces as an [`io::ErrorKind::Interrupted`] error.
pub struct ConsoleInput {
    events: Receiver<ConsoleEvent>,
}

impl LineSource for ConsoleInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.events.recv() {
            Ok(ConsoleEvent::Line(line)) => Ok(Some(line)),
            Ok(ConsoleEvent::Eof) | Err(_) => Ok(None),
            Ok(ConsoleEvent::Failed(err)) => Err(err),
            Ok(ConsoleEvent::Interrupt) => Err(io::ErrorKind::Interrupted.into()),
        }
    }
}

/// Start the stdin reader and the Ctrl-C watcher.
pub fn spawn_console(token: &CancelToken) -> io::Result<ConsoleInput> {
    let (tx, rx) = mpsc::channel();

    let reader_tx = tx.clone();
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || read_stdin(reader_tx))?;

    let token = token.clone();
    thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || watch_ctrl_c(token, tx))?;

    Ok(ConsoleInput { events: rx })
}

fn read_stdin(tx: Sender<ConsoleEvent>) {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        let event = match stdin.next_line() {
            Ok(Some(line)) => ConsoleEvent::Line(line),
            Ok(None) => ConsoleEvent::Eof,
            Err(err) => ConsoleEvent::Failed(err),
        };
        let last = !matches!(event, ConsoleEvent::Line(_));
        if tx.send(event).is_err() || last {
            return;
        }
    }
}

fn watch_ctrl_c(token: CancelToken, tx: Sender<ConsoleEvent>) {
    let rt = match runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            warn!(%err, "cannot watch for Ctrl-C");
            return;
        }
    };

    match rt.block_on(tokio::signal::ctrl_c()) {
        Ok(()) => {
            debug!("Ctrl-C received");
            token.cancel();
            let _ = tx.send(ConsoleEvent::Interrupt);
        }
        Err(err) => warn!(%err, "cannot watch for Ctrl-C"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_buffered_reader_lines() {
        let mut input = Cursor::new("H\nC");
        assert_eq!(input.next_line().unwrap(), Some("H\n".to_string()));
        assert_eq!(input.next_line().unwrap(), Some("C".to_string()));
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn test_console_events() {
        let (tx, rx) = mpsc::channel();
        let mut input = ConsoleInput { events: rx };

        tx.send(ConsoleEvent::Line("L\n".into())).unwrap();
        tx.send(ConsoleEvent::Interrupt).unwrap();
        tx.send(ConsoleEvent::Eof).unwrap();

        assert_eq!(input.next_line().unwrap(), Some("L\n".to_string()));
        assert_eq!(
            input.next_line().unwrap_err().kind(),
            io::ErrorKind::Interrupted
        );
        assert_eq!(input.next_line().unwrap(), None);

        drop(tx);
        assert_eq!(input.next_line().unwrap(), None);
    }
}
