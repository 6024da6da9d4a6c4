// SPDX-License-Identifier: MIT
//
// tint-term color model: the 8 classic terminal colors and 24-bit RGB.
//
// Two color worlds live side by side here:
//
//   NamedColor + Ground + brightness → the compact SGR 30-37 / 40-47 codes
//   that every ANSI terminal understands.
//
//   Rgb → 24-bit TrueColor, the payload of `ESC[38;2;…m` / `ESC[48;2;…m`.
//
// A NamedColor converts to an Rgb through a fixed table of pure-channel
// triads, so gradients and maps can use named anchors without caring about
// the terminal's own palette.

use std::fmt;

// ─── NamedColor ──────────────────────────────────────────────────────────────

/// One of the 8 base terminal colors.
///
/// The discriminant is the color digit in the SGR code: red is `1`, so
/// foreground red is `ESC[31m` and background red is `ESC[41m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl NamedColor {
    /// All named colors in SGR order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// The SGR color digit (`0`–`7`).
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as accepted by [`NamedColor::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Look up a color by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Ground ──────────────────────────────────────────────────────────────────

/// Whether a color paints the text (foreground) or the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ground {
    #[default]
    Fore,
    Back,
}

impl Ground {
    /// The leading SGR digit: `3` for foreground, `4` for background.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Fore => 3,
            Self::Back => 4,
        }
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit color: three 8-bit channels.
///
/// ```
/// use tint_term::color::{NamedColor, Rgb};
///
/// let orange = Rgb::from_packed(0xFF_80_00);
/// assert_eq!(orange, Rgb::new(255, 128, 0));
/// assert_eq!(Rgb::hex("#ff8000"), Some(orange));
/// assert_eq!(Rgb::from(NamedColor::Cyan), Rgb::new(0, 255, 255));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`. Bits above the low 24 are ignored.
    #[inline]
    #[must_use]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack back into `0xRRGGBB`.
    #[inline]
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// The pure-channel triad for a named color.
    #[must_use]
    pub const fn named(color: NamedColor) -> Self {
        const TRIADS: [Rgb; 8] = [
            Rgb::new(0x00, 0x00, 0x00),
            Rgb::new(0xFF, 0x00, 0x00),
            Rgb::new(0x00, 0xFF, 0x00),
            Rgb::new(0xFF, 0xFF, 0x00),
            Rgb::new(0x00, 0x00, 0xFF),
            Rgb::new(0xFF, 0x00, 0xFF),
            Rgb::new(0x00, 0xFF, 0xFF),
            Rgb::new(0xFF, 0xFF, 0xFF),
        ];
        TRIADS[color as usize]
    }

    /// Parse a hex color.
    ///
    /// Supports `#RRGGBB` and `#RGB`, with or without the `#`. Returns
    /// `None` for anything else.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match s.len() {
            3 => {
                let v = u16::from_str_radix(s, 16).ok()?;
                // Expand each nibble: 0xF → 0xFF.
                let expand = |n: u16| (n & 0xF) as u8 * 0x11;
                Some(Self::new(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            6 => u32::from_str_radix(s, 16).ok().map(Self::from_packed),
            _ => None,
        }
    }
}

impl From<NamedColor> for Rgb {
    fn from(color: NamedColor) -> Self {
        Self::named(color)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
