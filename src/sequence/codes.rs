//! Named parameter values for SGR and DEC private mode sequences.

/// Select Graphic Rendition codes.
pub mod sgr {
    pub const RESET: u16 = 0;
    pub const BOLD: u16 = 1;
    pub const DIM: u16 = 2;
    pub const ITALIC: u16 = 3;
    pub const UNDERLINE: u16 = 4;
    pub const BLINK: u16 = 5;
    pub const REVERSE: u16 = 7;
    pub const HIDDEN: u16 = 8;
    pub const STRIKETHROUGH: u16 = 9;
    /// Neither bold nor dim.
    pub const NORMAL_INTENSITY: u16 = 22;
    pub const NO_ITALIC: u16 = 23;
    pub const NO_UNDERLINE: u16 = 24;
    pub const NO_BLINK: u16 = 25;
    pub const NO_REVERSE: u16 = 27;
    pub const NO_HIDDEN: u16 = 28;
    pub const NO_STRIKETHROUGH: u16 = 29;
    pub const DEFAULT_FOREGROUND: u16 = 39;
    pub const DEFAULT_BACKGROUND: u16 = 49;
}

/// DEC private modes for `CSI ? n h` / `CSI ? n l`.
pub mod mode {
    pub const CURSOR_KEYS: u16 = 1;
    pub const AUTO_WRAP: u16 = 7;
    pub const CURSOR_VISIBLE: u16 = 25;
    pub const MOUSE_TRACKING: u16 = 1000;
    /// Alternate screen buffer, saving the cursor on entry.
    pub const ALTERNATE_SCREEN: u16 = 1049;
    pub const BRACKETED_PASTE: u16 = 2004;
}
