//! Terminal input sources for cursor position queries.

use std::io;
use std::time::Duration;

use crate::error::QueryError;

/// An input stream that can be switched into raw mode and read with a bound.
///
/// Each implementation wraps one source of terminal input. The process stdin
/// is provided by [`StdinInput`]; tests substitute scripted inputs.
pub trait TerminalInput {
    /// Switch to raw (unbuffered, unechoed) mode.
    ///
    /// Must fail with [`QueryError::IoUnavailable`] when the input is not an
    /// interactive terminal.
    fn enable_raw_mode(&mut self) -> Result<(), QueryError>;

    /// Restore the mode that was active before [`enable_raw_mode`](Self::enable_raw_mode).
    fn disable_raw_mode(&mut self) -> io::Result<()>;

    /// Read one chunk of available input, waiting at most `timeout`.
    ///
    /// Returns `Ok(None)` if nothing arrived in time and `Ok(Some(0))` at end of input.
    fn read_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>>;
}

/// The process stdin, put into raw mode through crossterm.
///
/// Raw mode is process-wide: other code reading stdin while a query is in
/// flight will race with it.
#[derive(Debug, Default)]
pub struct StdinInput {
    /// Raw mode was enabled by us and must be switched off again.
    restore: bool,
}

impl StdinInput {
    /// Create a new stdin input.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalInput for StdinInput {
    #[cfg(unix)]
    fn enable_raw_mode(&mut self) -> Result<(), QueryError> {
        if !atty::is(atty::Stream::Stdin) {
            return Err(QueryError::unavailable("stdin is not a terminal"));
        }

        let already_raw =
            crossterm::terminal::is_raw_mode_enabled().map_err(QueryError::unavailable)?;
        if !already_raw {
            crossterm::terminal::enable_raw_mode().map_err(QueryError::unavailable)?;
        }
        self.restore = !already_raw;
        Ok(())
    }

    #[cfg(not(unix))]
    fn enable_raw_mode(&mut self) -> Result<(), QueryError> {
        Err(QueryError::unavailable(
            "bounded stdin reads are only supported on unix",
        ))
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.restore) {
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    #[cfg(unix)]
    fn read_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> io::Result<Option<usize>> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;

        // SAFETY: `fds` is a single valid pollfd that outlives the call.
        let ready = unsafe { libc::poll(&mut fds, 1, millis) };
        if ready < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(err);
        }
        if ready == 0 {
            return Ok(None);
        }

        // Read the descriptor directly so nothing is left behind in std's stdin buffer.
        // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Some(n as usize))
    }

    #[cfg(not(unix))]
    fn read_timeout(&mut self, _buf: &mut [u8], _timeout: Duration) -> io::Result<Option<usize>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "bounded stdin reads are only supported on unix",
        ))
    }
}
