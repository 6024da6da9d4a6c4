// SPDX-License-Identifier: MIT
//
// Decoration: every kind of escape-producing value in one closed enum.
//
//   Color      → one of the 16 named colors per ground (SGR 30-37 / 40-47, ;1)
//   Style      → reset, bold, underline, swap (SGR 0 / 1 / 4 / 7)
//   Move       → relative cursor movement (CUU / CUD / CUF / CUB)
//   TrueColor  → 24-bit RGB (SGR 38;2 / 48;2)
//
// A `Decoration` is a plain Copy value. Renderers hold one (or build one per
// character) and call `write_to`, which dispatches to the codec in `ansi`.
// The named table at the bottom replaces a pile of global constants: ask for
// "red_bright" or "bg_cyan" by name and get the matching value back.

use std::fmt;
use std::io::{self, Write};

use crate::ansi;
use crate::color::{Ground, NamedColor, Rgb};
use crate::render::Render;

// ─── Selectors ───────────────────────────────────────────────────────────────

/// A named color with its brightness flag and ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode {
    pub color: NamedColor,
    pub bright: bool,
    pub ground: Ground,
}

impl ColorCode {
    #[inline]
    #[must_use]
    pub const fn new(color: NamedColor, bright: bool, ground: Ground) -> Self {
        Self {
            color,
            bright,
            ground,
        }
    }

    /// Normal-intensity foreground color.
    #[inline]
    #[must_use]
    pub const fn fore(color: NamedColor) -> Self {
        Self::new(color, false, Ground::Fore)
    }

    /// Normal-intensity background color.
    #[inline]
    #[must_use]
    pub const fn back(color: NamedColor) -> Self {
        Self::new(color, false, Ground::Back)
    }

    /// The same color with the brightness flag set.
    #[inline]
    #[must_use]
    pub const fn bright(self) -> Self {
        Self {
            bright: true,
            ..self
        }
    }
}

/// Text style. Styles never combine: each decorated run carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Reset,
    Bold,
    Underline,
    /// Swap foreground and background (SGR 7, "inverse").
    Swap,
}

impl Style {
    pub const ALL: [Self; 4] = [Self::Reset, Self::Bold, Self::Underline, Self::Swap];

    /// SGR parameter.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Reset => 0,
            Self::Bold => 1,
            Self::Underline => 4,
            Self::Swap => 7,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Swap => "swap",
        }
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    /// Final byte of the CSI sequence: `A`, `B`, `C` or `D`.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        b'A' + self as u8
    }
}

/// Move the cursor `count` cells in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub direction: Direction,
    pub count: u16,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(direction: Direction, count: u16) -> Self {
        Self { direction, count }
    }
}

/// A 24-bit color applied to one ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrueColor {
    pub rgb: Rgb,
    pub ground: Ground,
}

impl TrueColor {
    #[inline]
    #[must_use]
    pub const fn fore(rgb: Rgb) -> Self {
        Self {
            rgb,
            ground: Ground::Fore,
        }
    }

    #[inline]
    #[must_use]
    pub const fn back(rgb: Rgb) -> Self {
        Self {
            rgb,
            ground: Ground::Back,
        }
    }
}

// ─── Decoration ──────────────────────────────────────────────────────────────

/// Anything that turns into a single escape sequence.
///
/// ```
/// use tint_term::color::{NamedColor, Rgb};
/// use tint_term::decoration::{ColorCode, Decoration, TrueColor};
///
/// let red = Decoration::from(ColorCode::fore(NamedColor::Red).bright());
/// assert_eq!(red.escape(), "\x1b[31;1m");
///
/// let orange = Decoration::from(TrueColor::fore(Rgb::new(255, 128, 0)));
/// assert_eq!(orange.escape(), "\x1b[38;2;255;128;000m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Color(ColorCode),
    Style(Style),
    Move(Move),
    TrueColor(TrueColor),
}

impl Decoration {
    /// The escape sequence as a string.
    #[must_use]
    pub fn escape(&self) -> String {
        String::from_utf8_lossy(&self.render()).into_owned()
    }
}

impl Render for Decoration {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        match *self {
            Self::Color(code) => ansi::color(w, code),
            Self::Style(style) => ansi::style(w, style),
            Self::Move(mv) => ansi::cursor_move(w, mv),
            Self::TrueColor(tc) => ansi::true_color(w, tc),
        }
    }
}

impl From<ColorCode> for Decoration {
    fn from(code: ColorCode) -> Self {
        Self::Color(code)
    }
}

impl From<Style> for Decoration {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

impl From<Move> for Decoration {
    fn from(mv: Move) -> Self {
        Self::Move(mv)
    }
}

impl From<TrueColor> for Decoration {
    fn from(tc: TrueColor) -> Self {
        Self::TrueColor(tc)
    }
}

impl fmt::Display for Decoration {
    /// Writes the raw escape sequence, so `format!("{red}text")` works.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

// ─── Named Table ─────────────────────────────────────────────────────────────

const BACK_PREFIX: &str = "bg_";
const BRIGHT_SUFFIX: &str = "_bright";

/// Look up a named color or style.
///
/// Accepted names: `reset`, `bold`, `underline`, `swap`, and for every
/// named color `<color>`, `<color>_bright`, `bg_<color>`, `bg_<color>_bright`.
#[must_use]
pub fn lookup(name: &str) -> Option<Decoration> {
    if let Some(style) = Style::ALL.into_iter().find(|s| s.name() == name) {
        return Some(Decoration::Style(style));
    }

    let (ground, rest) = name
        .strip_prefix(BACK_PREFIX)
        .map_or((Ground::Fore, name), |rest| (Ground::Back, rest));
    let (bright, rest) = rest
        .strip_suffix(BRIGHT_SUFFIX)
        .map_or((false, rest), |rest| (true, rest));

    NamedColor::from_name(rest).map(|color| Decoration::Color(ColorCode::new(color, bright, ground)))
}

/// Every name [`lookup`] accepts, styles first, then colors in SGR order.
#[must_use]
pub fn names() -> Vec<String> {
    let mut out: Vec<String> = Style::ALL.iter().map(|s| s.name().to_string()).collect();
    for prefix in ["", BACK_PREFIX] {
        for suffix in ["", BRIGHT_SUFFIX] {
            for color in NamedColor::ALL {
                out.push(format!("{prefix}{}{suffix}", color.name()));
            }
        }
    }
    out
}
