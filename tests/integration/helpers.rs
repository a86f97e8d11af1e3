//! Shared fakes for the integration tests.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use termseq::{QueryError, TerminalInput};

/// Replace ESC with a printable marker so sequences read well in snapshots.
pub fn visible(text: &str) -> String {
    text.replace('\x1b', "ESC")
}

/// Terminal input that replays scripted reads.
///
/// `None` entries (and an exhausted script) simulate a wait that saw no input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub terminal: bool,
    pub reads: VecDeque<Option<Vec<u8>>>,
    pub raw_enters: usize,
    pub raw_exits: usize,
    /// Sleep this long on every empty wait.
    pub idle: Duration,
    /// Set while in raw mode, shared between inputs to detect overlapping queries.
    pub active: Option<Arc<AtomicBool>>,
}

impl ScriptedInput {
    pub fn replying(reads: Vec<Option<&str>>) -> Self {
        Self {
            terminal: true,
            reads: reads
                .into_iter()
                .map(|r| r.map(|s| s.as_bytes().to_vec()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn not_a_terminal() -> Self {
        Self::default()
    }
}

impl TerminalInput for ScriptedInput {
    fn enable_raw_mode(&mut self) -> Result<(), QueryError> {
        if !self.terminal {
            return Err(QueryError::unavailable("stdin is not a terminal"));
        }
        if let Some(active) = &self.active {
            assert!(!active.swap(true, Ordering::SeqCst), "overlapping queries");
        }
        self.raw_enters += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if let Some(active) = &self.active {
            active.store(false, Ordering::SeqCst);
        }
        self.raw_exits += 1;
        Ok(())
    }

    fn read_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>> {
        match self.reads.pop_front() {
            Some(Some(bytes)) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(Some(bytes.len()))
            }
            Some(None) | None => {
                std::thread::sleep(self.idle.min(timeout));
                Ok(None)
            }
        }
    }
}

/// Output that rejects every write.
#[derive(Debug, Default)]
pub struct FailingOutput;

impl Write for FailingOutput {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
