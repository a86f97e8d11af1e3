//! Fluent escape sequence writer.
//!
//! Sequences accumulate in an in-memory buffer and reach the output only on
//! [`SequenceWriter::flush`], as a single write.
//!
//! # Usage
//!
//! ```no_run
//! use termseq::{Color, SequenceWriter};
//!
//! let mut writer = SequenceWriter::new(std::io::stdout())
//!     .erase_display(None)
//!     .cursor_position(3, 10)
//!     .fg(Color::Red)
//!     .text("hello");
//! writer.flush_with("", true).unwrap();
//! ```

use std::io::{self, Write};

use crate::config::Config;
use crate::error::{QueryError, SequenceError};
use crate::query::{self, CursorPosition, QueryOptions, TerminalInput};
use crate::sequence::catalog::{self, SequenceDef};
use crate::sequence::{lookup, mode, sgr, Color, Style};

/// Builds terminal control sequences and writes them to `W` in one go.
///
/// Appending never touches the output. Only [`flush`](Self::flush),
/// [`flush_with`](Self::flush_with) and
/// [`query_cursor_position`](Self::query_cursor_position) write to it.
#[derive(Debug)]
pub struct SequenceWriter<W: Write> {
    output: W,
    buffer: String,
    query_options: QueryOptions,
    reset_on_flush: bool,
}

impl<W: Write> SequenceWriter<W> {
    /// Create a writer with an empty buffer.
    pub fn new(output: W) -> Self {
        Self {
            output,
            buffer: String::new(),
            query_options: QueryOptions::default(),
            reset_on_flush: false,
        }
    }

    /// Create a writer using the query and flush settings from `config`.
    pub fn with_config(output: W, config: &Config) -> Self {
        Self {
            query_options: config.query_options(),
            reset_on_flush: config.flush.reset_attributes,
            ..Self::new(output)
        }
    }

    /// Replace the options used by [`query_cursor_position`](Self::query_cursor_position).
    #[must_use]
    pub fn with_query_options(mut self, options: QueryOptions) -> Self {
        self.query_options = options;
        self
    }

    pub fn query_options(&self) -> &QueryOptions {
        &self.query_options
    }

    /// The sequences accumulated since the last flush.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the writer, returning the output. Unflushed sequences are dropped.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn push(mut self, def: &SequenceDef, params: &[u16]) -> Self {
        def.render(&mut self.buffer, params);
        self
    }

    fn push_count(self, def: &SequenceDef, count: Option<u16>) -> Self {
        self.push(def, &[count.unwrap_or(1)])
    }

    /// Out-of-range modes are mapped by the catalog entry, so typed and named
    /// appends agree.
    fn push_mode(self, def: &SequenceDef, mode: Option<u8>) -> Self {
        match mode.map(u16::from).or(def.default) {
            Some(mode) => self.push(def, &[mode]),
            None => self.push(def, &[]),
        }
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Append literal text.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a catalog sequence by its symbolic name.
    ///
    /// Nothing is appended on error.
    pub fn append_named(&mut self, name: &str, params: &[u16]) -> Result<&mut Self, SequenceError> {
        let def = lookup(name).ok_or_else(|| SequenceError::UnknownSequence(name.to_string()))?;
        let sequence = def.format(params)?;
        self.buffer.push_str(&sequence);
        Ok(self)
    }

    // ========================================================================
    // Cursor movement
    // ========================================================================

    #[must_use]
    pub fn cursor_up(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_UP, count.into())
    }

    #[must_use]
    pub fn cursor_down(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_DOWN, count.into())
    }

    #[must_use]
    pub fn cursor_forward(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_FORWARD, count.into())
    }

    #[must_use]
    pub fn cursor_back(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_BACK, count.into())
    }

    /// Move to the start of a line `count` lines down (`CSI n E`).
    #[must_use]
    pub fn cursor_next_line(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_NEXT_LINE, count.into())
    }

    /// Move to the start of a line `count` lines up (`CSI n F`).
    #[must_use]
    pub fn cursor_previous_line(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::CURSOR_PREVIOUS_LINE, count.into())
    }

    /// Move to a 1-based row and column.
    #[must_use]
    pub fn cursor_position(self, row: u16, column: u16) -> Self {
        self.push(&catalog::CURSOR_POSITION, &[row, column])
    }

    #[must_use]
    pub fn save_cursor(self) -> Self {
        self.push(&catalog::SAVE_CURSOR, &[])
    }

    #[must_use]
    pub fn restore_cursor(self) -> Self {
        self.push(&catalog::RESTORE_CURSOR, &[])
    }

    // ========================================================================
    // Erasing and editing
    // ========================================================================

    /// Erase part of the display: 0 = to end, 1 = to start, 2 = all.
    ///
    /// Anything else, including `None`, erases everything.
    #[must_use]
    pub fn erase_display(self, mode: impl Into<Option<u8>>) -> Self {
        self.push_mode(&catalog::ERASE_DISPLAY, mode.into())
    }

    /// Erase part of the current line, with the same modes as [`erase_display`](Self::erase_display).
    #[must_use]
    pub fn erase_line(self, mode: impl Into<Option<u8>>) -> Self {
        self.push_mode(&catalog::ERASE_LINE, mode.into())
    }

    #[must_use]
    pub fn scroll_up(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::SCROLL_UP, count.into())
    }

    #[must_use]
    pub fn scroll_down(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::SCROLL_DOWN, count.into())
    }

    #[must_use]
    pub fn insert_chars(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::INSERT_CHARS, count.into())
    }

    #[must_use]
    pub fn delete_chars(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::DELETE_CHARS, count.into())
    }

    #[must_use]
    pub fn erase_chars(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::ERASE_CHARS, count.into())
    }

    #[must_use]
    pub fn insert_lines(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::INSERT_LINES, count.into())
    }

    #[must_use]
    pub fn delete_lines(self, count: impl Into<Option<u16>>) -> Self {
        self.push_count(&catalog::DELETE_LINES, count.into())
    }

    // ========================================================================
    // Graphic rendition
    // ========================================================================

    /// Select Graphic Rendition with the given codes, in order.
    #[must_use]
    pub fn sgr(self, codes: &[u16]) -> Self {
        self.push(&catalog::SELECT_GRAPHIC_RENDITION, codes)
    }

    /// Set the foreground color. `Color::Default` selects the terminal default.
    #[must_use]
    pub fn fg(self, color: Color) -> Self {
        let mut codes = Vec::new();
        if !color.push_fg_params(&mut codes) {
            codes.push(sgr::DEFAULT_FOREGROUND);
        }
        self.sgr(&codes)
    }

    /// Set the background color. `Color::Default` selects the terminal default.
    #[must_use]
    pub fn bg(self, color: Color) -> Self {
        let mut codes = Vec::new();
        if !color.push_bg_params(&mut codes) {
            codes.push(sgr::DEFAULT_BACKGROUND);
        }
        self.sgr(&codes)
    }

    /// Apply a complete style. A default style resets all attributes.
    #[must_use]
    pub fn style(self, style: &Style) -> Self {
        let codes = style.sgr_params();
        if codes.is_empty() {
            self.reset_attributes()
        } else {
            self.sgr(&codes)
        }
    }

    #[must_use]
    pub fn reset_attributes(self) -> Self {
        self.sgr(&[sgr::RESET])
    }

    // ========================================================================
    // Modes and character sets
    // ========================================================================

    /// DECSET: `CSI ? mode h`.
    #[must_use]
    pub fn set_private_mode(self, mode: u16) -> Self {
        self.push(&catalog::SET_PRIVATE_MODE, &[mode])
    }

    /// DECRST: `CSI ? mode l`.
    #[must_use]
    pub fn reset_private_mode(self, mode: u16) -> Self {
        self.push(&catalog::RESET_PRIVATE_MODE, &[mode])
    }

    #[must_use]
    pub fn hide_cursor(self) -> Self {
        self.reset_private_mode(mode::CURSOR_VISIBLE)
    }

    #[must_use]
    pub fn show_cursor(self) -> Self {
        self.set_private_mode(mode::CURSOR_VISIBLE)
    }

    #[must_use]
    pub fn enter_alternate_screen(self) -> Self {
        self.set_private_mode(mode::ALTERNATE_SCREEN)
    }

    #[must_use]
    pub fn leave_alternate_screen(self) -> Self {
        self.reset_private_mode(mode::ALTERNATE_SCREEN)
    }

    /// Designate the G0 character set: `ESC ( designator`, e.g. `'B'` for ASCII
    /// or `'0'` for DEC line drawing.
    #[must_use]
    pub fn select_charset(mut self, designator: char) -> Self {
        self.buffer.push_str(catalog::Introducer::EscCharset.as_str());
        self.buffer.push(designator);
        self
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write the buffer to the output and clear it.
    ///
    /// Appends a reset of all attributes when the writer was configured with
    /// `flush.reset_attributes`.
    pub fn flush(&mut self) -> io::Result<()> {
        self.flush_with("", self.reset_on_flush)
    }

    /// Write the buffer, then `message`, then (if `reset`) `CSI 0 m`.
    ///
    /// The buffer is cleared before writing, so it is empty afterwards even
    /// when the output fails.
    pub fn flush_with(&mut self, message: &str, reset: bool) -> io::Result<()> {
        let pending = std::mem::take(&mut self.buffer);
        tracing::trace!(
            bytes = pending.len(),
            trailing = message.len(),
            reset,
            "flushing sequences"
        );

        self.output.write_all(pending.as_bytes())?;
        if !message.is_empty() {
            self.output.write_all(message.as_bytes())?;
        }
        if reset {
            let mut sequence = String::new();
            catalog::SELECT_GRAPHIC_RENDITION.render(&mut sequence, &[sgr::RESET]);
            self.output.write_all(sequence.as_bytes())?;
        }
        self.output.flush()
    }

    /// Ask the terminal for the cursor position, reading the report from `input`.
    ///
    /// The request is written straight to the output; buffered sequences stay
    /// in the buffer. Uses this writer's [`QueryOptions`].
    pub fn query_cursor_position<I>(&mut self, input: &mut I) -> Result<CursorPosition, QueryError>
    where
        I: TerminalInput + ?Sized,
    {
        query::query_cursor_position(&mut self.output, input, &self.query_options)
    }
}
