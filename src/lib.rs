//! termseq - fluent builder for VT100/ANSI terminal control sequences
//!
//! Chain cursor movement, erase, scroll, editing and attribute operations on a
//! [`SequenceWriter`]; each appends one escape sequence to an internal buffer
//! that is written to the output in a single [`flush`](SequenceWriter::flush).
//! [`SequenceWriter::query_cursor_position`] asks the terminal where the
//! cursor is and waits, with a timeout, for its report.
//!
//! - `sequence`: catalog of sequences, colors, styles and named codes
//! - `writer`: the buffering writer
//! - `query`: cursor position request/response protocol
//! - `config`: TOML configuration
//! - `error`: error types

pub mod config;
pub mod error;
pub mod query;
pub mod sequence;
pub mod writer;

pub use config::Config;
pub use error::{QueryError, SequenceError};
pub use query::{CancelHandle, CursorPosition, QueryOptions, StdinInput, TerminalInput};
pub use sequence::{mode, sgr, Color, Style};
pub use writer::SequenceWriter;
