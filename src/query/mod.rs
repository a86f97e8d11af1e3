//! Cursor position query protocol.
//!
//! A query is a single request/response exchange with the terminal:
//!
//! 1. Wait for any other query in the process to finish
//! 2. Put the input into raw mode (fails with `IoUnavailable` before anything is sent)
//! 3. Write `CSI 6 n` straight to the output, bypassing any buffered sequences
//! 4. Wait for one chunk of input
//! 5. Restore the input mode, on every exit path
//! 6. Parse `CSI row ; col R` from the chunk
//!
//! Only one query runs at a time in the process, since raw mode is shared state.
//! The timeout covers steps 1 to 4 together, and the cancel handle is checked
//! throughout them.

mod cancel;
mod input;
mod response;

pub use cancel::CancelHandle;
pub use input::{StdinInput, TerminalInput};
pub use response::{parse_cursor_report, CursorPosition};

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, TryLockError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::QueryError;
use crate::sequence::catalog;

/// Default time to wait for the terminal's report.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default slice between cancellation and deadline checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Largest chunk read in response to a request.
const READ_CHUNK_SIZE: usize = 64;

/// Held for the duration of a query.
static IN_FLIGHT: Mutex<()> = Mutex::new(());

/// Options for a cursor position query.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Give up after this long. `None` waits forever.
    pub timeout: Option<Duration>,
    /// How long each wait on the input lasts before checking cancellation again.
    pub poll_interval: Duration,
    pub cancel: Option<CancelHandle>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            poll_interval: DEFAULT_POLL_INTERVAL,
            cancel: None,
        }
    }
}

impl QueryOptions {
    /// Set the timeout (`None` waits forever).
    #[must_use]
    pub fn timeout(mut self, timeout: impl Into<Option<Duration>>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Set the poll interval. Zero is raised to one millisecond.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Attach a cancel handle.
    #[must_use]
    pub fn cancel_with(mut self, handle: CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelHandle::is_cancelled)
    }

    /// Length of the next wait for a query that began at `started`.
    fn next_wait(&self, started: Instant) -> Result<Duration, QueryError> {
        if self.is_cancelled() {
            return Err(QueryError::Cancelled);
        }

        match self.timeout {
            Some(limit) => {
                let elapsed = started.elapsed();
                if elapsed >= limit {
                    return Err(QueryError::Timeout(limit));
                }
                Ok((limit - elapsed).min(self.poll_interval))
            }
            None => Ok(self.poll_interval),
        }
    }
}

/// Take the process-wide query slot, giving up on timeout or cancellation.
fn wait_for_turn(
    options: &QueryOptions,
    started: Instant,
) -> Result<MutexGuard<'static, ()>, QueryError> {
    loop {
        match IN_FLIGHT.try_lock() {
            Ok(guard) => return Ok(guard),
            Err(TryLockError::Poisoned(poisoned)) => return Ok(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => {}
        }

        let wait = options.next_wait(started)?;
        tracing::trace!(?wait, "cursor position query already in flight");
        thread::sleep(wait);
    }
}

/// Keeps the input in raw mode until dropped.
struct RawModeGuard<'a, I: TerminalInput + ?Sized> {
    input: &'a mut I,
}

impl<'a, I: TerminalInput + ?Sized> RawModeGuard<'a, I> {
    fn enter(input: &'a mut I) -> Result<Self, QueryError> {
        input.enable_raw_mode()?;
        Ok(Self { input })
    }

    /// Wait for one chunk of input, within what is left of the query's time.
    fn read_chunk(
        &mut self,
        options: &QueryOptions,
        started: Instant,
    ) -> Result<Vec<u8>, QueryError> {
        let mut buf = [0u8; READ_CHUNK_SIZE];

        loop {
            let wait = options.next_wait(started)?;
            match self.input.read_timeout(&mut buf, wait)? {
                Some(0) => return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
                Some(n) => return Ok(buf[..n].to_vec()),
                None => continue,
            }
        }
    }
}

impl<I: TerminalInput + ?Sized> Drop for RawModeGuard<'_, I> {
    fn drop(&mut self) {
        if let Err(e) = self.input.disable_raw_mode() {
            tracing::warn!(error = %e, "failed to restore terminal input mode");
        }
    }
}

/// Ask the terminal where the cursor is.
///
/// The request is written to `output` and flushed immediately. Blocks the
/// calling thread until the report arrives, the timeout elapses or the
/// cancel handle fires. Time spent waiting for another query to finish counts
/// against the timeout.
pub fn query_cursor_position<W, I>(
    output: &mut W,
    input: &mut I,
    options: &QueryOptions,
) -> Result<CursorPosition, QueryError>
where
    W: Write + ?Sized,
    I: TerminalInput + ?Sized,
{
    let started = Instant::now();
    let _in_flight = wait_for_turn(options, started)?;
    tracing::debug!(timeout = ?options.timeout, "querying cursor position");

    let chunk = {
        let mut raw = RawModeGuard::enter(input)?;

        let mut request = String::new();
        catalog::DEVICE_STATUS_REPORT.render(&mut request, &[6]);
        output.write_all(request.as_bytes())?;
        output.flush()?;

        raw.read_chunk(options, started)?
    };

    tracing::trace!(bytes = chunk.len(), "received cursor position response");
    let position = parse_cursor_report(&chunk)?;
    tracing::debug!(row = position.row, column = position.column, "cursor position");
    Ok(position)
}
