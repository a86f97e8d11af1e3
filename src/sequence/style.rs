//! Colors and text attributes, converted to SGR parameters.

use super::codes::sgr;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette entry.
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Offset of a named color from black, and whether it is bright.
    fn named_offset(self) -> Option<(u16, bool)> {
        let entry = match self {
            Self::Black => (0, false),
            Self::Red => (1, false),
            Self::Green => (2, false),
            Self::Yellow => (3, false),
            Self::Blue => (4, false),
            Self::Magenta => (5, false),
            Self::Cyan => (6, false),
            Self::White => (7, false),
            Self::BrightBlack => (0, true),
            Self::BrightRed => (1, true),
            Self::BrightGreen => (2, true),
            Self::BrightYellow => (3, true),
            Self::BrightBlue => (4, true),
            Self::BrightMagenta => (5, true),
            Self::BrightCyan => (6, true),
            Self::BrightWhite => (7, true),
            Self::Default | Self::Indexed(_) | Self::Rgb(..) => return None,
        };
        Some(entry)
    }

    /// Append the SGR parameters selecting this color as foreground.
    ///
    /// # Returns
    /// `true` if parameters were appended, `false` if the color is default
    pub fn push_fg_params(self, params: &mut Vec<u16>) -> bool {
        self.push_params(params, 30, 90, 38)
    }

    /// Append the SGR parameters selecting this color as background.
    ///
    /// # Returns
    /// `true` if parameters were appended, `false` if the color is default
    pub fn push_bg_params(self, params: &mut Vec<u16>) -> bool {
        self.push_params(params, 40, 100, 48)
    }

    fn push_params(self, params: &mut Vec<u16>, base: u16, bright_base: u16, extended: u16) -> bool {
        if let Some((offset, bright)) = self.named_offset() {
            let first = if bright { bright_base } else { base };
            params.push(first + offset);
            return true;
        }
        match self {
            Self::Indexed(n) => params.extend([extended, 5, u16::from(n)]),
            Self::Rgb(r, g, b) => {
                params.extend([extended, 2, u16::from(r), u16::from(g), u16::from(b)]);
            }
            _ => return false,
        }
        true
    }
}

/// A set of text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl Style {
    /// SGR parameters for this style, attributes first, then colors.
    ///
    /// A default style produces no parameters.
    pub fn sgr_params(&self) -> Vec<u16> {
        let mut params = Vec::new();
        let flags = [
            (self.bold, sgr::BOLD),
            (self.dim, sgr::DIM),
            (self.italic, sgr::ITALIC),
            (self.underline, sgr::UNDERLINE),
            (self.blink, sgr::BLINK),
            (self.reverse, sgr::REVERSE),
            (self.hidden, sgr::HIDDEN),
            (self.strikethrough, sgr::STRIKETHROUGH),
        ];
        params.extend(flags.iter().filter(|(on, _)| *on).map(|(_, code)| *code));
        self.fg.push_fg_params(&mut params);
        self.bg.push_bg_params(&mut params);
        params
    }
}
