//! Static catalog of the escape sequences the writer can emit.
//!
//! Every typed method on [`SequenceWriter`](crate::SequenceWriter) renders one
//! of these definitions, and [`lookup`] exposes the same table by symbolic name.

use crate::error::SequenceError;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Escape.
pub const ESC: &str = "\x1b";

/// The bytes that open a sequence, before any parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Introducer {
    /// `ESC [`
    Csi,
    /// `ESC [ ?` (DEC private modes)
    CsiPrivate,
    /// `ESC` alone
    Esc,
    /// `ESC (` (G0 character set designation)
    EscCharset,
}

impl Introducer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csi => "\x1b[",
            Self::CsiPrivate => "\x1b[?",
            Self::Esc => "\x1b",
            Self::EscCharset => "\x1b(",
        }
    }
}

/// How many numeric parameters a sequence takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// Any number, including none (SGR).
    Variadic,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceDef {
    pub name: &'static str,
    pub introducer: Introducer,
    pub final_byte: char,
    pub arity: Arity,
    /// Substituted when a single-parameter sequence is given no parameter.
    pub default: Option<u16>,
    /// Largest meaningful parameter. Larger values render as `default`.
    pub max: Option<u16>,
}

impl SequenceDef {
    const fn csi(name: &'static str, final_byte: char, arity: Arity, default: Option<u16>) -> Self {
        Self {
            name,
            introducer: Introducer::Csi,
            final_byte,
            arity,
            default,
            max: None,
        }
    }

    /// A selector sequence (erase) taking one mode in `0..=max`.
    const fn mode(name: &'static str, final_byte: char, default: u16, max: u16) -> Self {
        Self {
            max: Some(max),
            ..Self::csi(name, final_byte, Arity::Exactly(1), Some(default))
        }
    }

    const fn count(name: &'static str, final_byte: char) -> Self {
        Self::csi(name, final_byte, Arity::Exactly(1), Some(1))
    }

    const fn bare(name: &'static str, introducer: Introducer, final_byte: char) -> Self {
        Self {
            name,
            introducer,
            final_byte,
            arity: Arity::Exactly(0),
            default: None,
            max: None,
        }
    }

    /// Render this sequence with the given parameters.
    ///
    /// A single-parameter sequence with a default accepts an empty parameter
    /// list and renders the default instead.
    pub fn format(&self, params: &[u16]) -> Result<String, SequenceError> {
        let defaulted;
        let params = match (self.arity, self.default) {
            (Arity::Exactly(1), Some(value)) if params.is_empty() => {
                defaulted = [value];
                &defaulted[..]
            }
            _ => params,
        };

        if let Arity::Exactly(expected) = self.arity {
            if params.len() != expected {
                return Err(SequenceError::InvalidParameter {
                    name: self.name,
                    expected,
                    got: params.len(),
                });
            }
        }

        let mut out = String::new();
        self.render(&mut out, params);
        Ok(out)
    }

    /// Append this sequence to `buf`. Callers guarantee the arity.
    pub(crate) fn render(&self, buf: &mut String, params: &[u16]) {
        buf.push_str(self.introducer.as_str());
        for (i, &param) in params.iter().enumerate() {
            if i > 0 {
                buf.push(';');
            }
            buf.push_str(&self.clamp(param).to_string());
        }
        buf.push(self.final_byte);
    }

    fn clamp(&self, param: u16) -> u16 {
        match (self.max, self.default) {
            (Some(max), Some(fallback)) if param > max => fallback,
            _ => param,
        }
    }
}

pub const CURSOR_UP: SequenceDef = SequenceDef::count("cursor_up", 'A');
pub const CURSOR_DOWN: SequenceDef = SequenceDef::count("cursor_down", 'B');
pub const CURSOR_FORWARD: SequenceDef = SequenceDef::count("cursor_forward", 'C');
pub const CURSOR_BACK: SequenceDef = SequenceDef::count("cursor_back", 'D');
pub const CURSOR_NEXT_LINE: SequenceDef = SequenceDef::count("cursor_next_line", 'E');
pub const CURSOR_PREVIOUS_LINE: SequenceDef = SequenceDef::count("cursor_previous_line", 'F');
pub const CURSOR_POSITION: SequenceDef =
    SequenceDef::csi("cursor_position", 'H', Arity::Exactly(2), None);
/// Erase modes are 0 (to end), 1 (to start) and 2 (all). Anything else erases all.
pub const ERASE_DISPLAY: SequenceDef = SequenceDef::mode("erase_display", 'J', 2, 2);
pub const ERASE_LINE: SequenceDef = SequenceDef::mode("erase_line", 'K', 2, 2);
pub const SCROLL_UP: SequenceDef = SequenceDef::count("scroll_up", 'S');
pub const SCROLL_DOWN: SequenceDef = SequenceDef::count("scroll_down", 'T');
pub const INSERT_CHARS: SequenceDef = SequenceDef::count("insert_chars", '@');
pub const DELETE_CHARS: SequenceDef = SequenceDef::count("delete_chars", 'P');
pub const ERASE_CHARS: SequenceDef = SequenceDef::count("erase_chars", 'X');
pub const INSERT_LINES: SequenceDef = SequenceDef::count("insert_lines", 'L');
pub const DELETE_LINES: SequenceDef = SequenceDef::count("delete_lines", 'M');
pub const SELECT_GRAPHIC_RENDITION: SequenceDef =
    SequenceDef::csi("select_graphic_rendition", 'm', Arity::Variadic, None);
pub const SAVE_CURSOR: SequenceDef = SequenceDef::bare("save_cursor", Introducer::Esc, '7');
pub const RESTORE_CURSOR: SequenceDef = SequenceDef::bare("restore_cursor", Introducer::Esc, '8');
pub const SET_PRIVATE_MODE: SequenceDef = SequenceDef {
    name: "set_private_mode",
    introducer: Introducer::CsiPrivate,
    final_byte: 'h',
    arity: Arity::Exactly(1),
    default: None,
    max: None,
};
pub const RESET_PRIVATE_MODE: SequenceDef = SequenceDef {
    name: "reset_private_mode",
    introducer: Introducer::CsiPrivate,
    final_byte: 'l',
    arity: Arity::Exactly(1),
    default: None,
    max: None,
};
pub const CHARSET_ASCII: SequenceDef =
    SequenceDef::bare("charset_ascii", Introducer::EscCharset, 'B');
pub const CHARSET_UK: SequenceDef = SequenceDef::bare("charset_uk", Introducer::EscCharset, 'A');
pub const CHARSET_DEC_SPECIAL: SequenceDef =
    SequenceDef::bare("charset_dec_special", Introducer::EscCharset, '0');
/// Device status report. With the default parameter 6 it requests the cursor position.
///
/// Only the query sends this, since the reply arrives on the input and has to
/// be read in raw mode. It is not reachable through [`lookup`].
pub(crate) const DEVICE_STATUS_REPORT: SequenceDef =
    SequenceDef::csi("device_status_report", 'n', Arity::Exactly(1), Some(6));

/// Every entry, in lookup order.
pub const CATALOG: &[SequenceDef] = &[
    CURSOR_UP,
    CURSOR_DOWN,
    CURSOR_FORWARD,
    CURSOR_BACK,
    CURSOR_NEXT_LINE,
    CURSOR_PREVIOUS_LINE,
    CURSOR_POSITION,
    ERASE_DISPLAY,
    ERASE_LINE,
    SCROLL_UP,
    SCROLL_DOWN,
    INSERT_CHARS,
    DELETE_CHARS,
    ERASE_CHARS,
    INSERT_LINES,
    DELETE_LINES,
    SELECT_GRAPHIC_RENDITION,
    SAVE_CURSOR,
    RESTORE_CURSOR,
    SET_PRIVATE_MODE,
    RESET_PRIVATE_MODE,
    CHARSET_ASCII,
    CHARSET_UK,
    CHARSET_DEC_SPECIAL,
];

/// Find a catalog entry by its symbolic name.
pub fn lookup(name: &str) -> Option<&'static SequenceDef> {
    CATALOG.iter().find(|def| def.name == name)
}
