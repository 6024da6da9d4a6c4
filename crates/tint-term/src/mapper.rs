// SPDX-License-Identifier: MIT
//
// Character-class mapper: color each byte of a string on its own.
//
// Resolution order for every byte:
//
//   1. explicit per-character override
//   2. first active class filter, in declaration order:
//        Alphabetic → Numeric → Whitespace → Symbolic
//   3. the catch-all `Any` filter
//   4. passthrough, no escape bytes at all
//
// Every colored byte is a self-contained run: TrueColor prefix, the byte,
// reset. Rules are collected into a `Rules` value up front and frozen into
// lookup tables by `Mapper::new`; after that the mapper never changes.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::ansi;
use crate::color::Rgb;
use crate::decoration::TrueColor;
use crate::render::Render;

/// The punctuation/symbol set matched by [`CharClass::Symbolic`].
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}\\|;':\",./<>?";

// ─── CharClass ───────────────────────────────────────────────────────────────

/// A coarse character category. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A`–`Z`, `a`–`z`.
    Alphabetic,
    /// `0`–`9`.
    Numeric,
    /// Space, tab, line feed, vertical tab, form feed, carriage return.
    Whitespace,
    /// Any byte in [`SYMBOLS`].
    Symbolic,
    /// Everything. Only consulted after the four concrete classes.
    Any,
}

impl CharClass {
    pub const ALL: [Self; 5] = [
        Self::Alphabetic,
        Self::Numeric,
        Self::Whitespace,
        Self::Symbolic,
        Self::Any,
    ];

    /// Whether `byte` belongs to this class.
    #[must_use]
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Self::Alphabetic => byte.is_ascii_alphabetic(),
            Self::Numeric => byte.is_ascii_digit(),
            // C `isspace`: includes vertical tab, which `is_ascii_whitespace` does not.
            Self::Whitespace => matches!(byte, b' ' | b'\t'..=b'\r'),
            Self::Symbolic => SYMBOLS.contains(&byte),
            Self::Any => true,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetic => "alpha",
            Self::Numeric => "digit",
            Self::Whitespace => "space",
            Self::Symbolic => "symbol",
            Self::Any => "any",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// A single mapping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Color this exact byte. Beats every class.
    Char(u8, Rgb),
    /// Activate a class filter with a color.
    Class(CharClass, Rgb),
}

/// An ordered list of rules. Later rules for the same key replace earlier ones.
///
/// ```
/// use tint_term::color::Rgb;
/// use tint_term::mapper::{CharClass, Mapper, Rules};
/// use tint_term::render::Render;
///
/// let rules = Rules::new()
///     .class(CharClass::Numeric, Rgb::new(0, 255, 0))
///     .char(b'!', Rgb::new(255, 0, 0));
/// let out = Mapper::new("a1!", &rules).render();
/// assert_eq!(
///     out,
///     b"a\x1b[38;2;000;255;000m1\x1b[0m\x1b[38;2;255;000;000m!\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add an explicit override for one byte.
    #[must_use]
    pub fn char(mut self, byte: u8, rgb: Rgb) -> Self {
        self.rules.push(Rule::Char(byte, rgb));
        self
    }

    /// Activate a class filter.
    #[must_use]
    pub fn class(mut self, class: CharClass, rgb: Rgb) -> Self {
        self.rules.push(Rule::Class(class, rgb));
        self
    }

    /// Append any rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Rules {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

// ─── Mapper ──────────────────────────────────────────────────────────────────

/// A fixed string plus the frozen rule tables used to color it.
#[derive(Debug, Clone)]
pub struct Mapper {
    text: String,
    overrides: HashMap<u8, Rgb>,
    filters: [Option<Rgb>; 5],
}

impl Mapper {
    #[must_use]
    pub fn new(text: impl Into<String>, rules: &Rules) -> Self {
        let mut overrides = HashMap::new();
        let mut filters = [None; 5];

        for rule in rules.as_slice() {
            match *rule {
                Rule::Char(byte, rgb) => {
                    overrides.insert(byte, rgb);
                }
                Rule::Class(class, rgb) => filters[class.index()] = Some(rgb),
            }
        }

        Self {
            text: text.into(),
            overrides,
            filters,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The color a byte resolves to, or `None` for passthrough.
    #[must_use]
    pub fn resolve(&self, byte: u8) -> Option<Rgb> {
        if let Some(&rgb) = self.overrides.get(&byte) {
            return Some(rgb);
        }

        CharClass::ALL
            .into_iter()
            .find_map(|class| self.filters[class.index()].filter(|_| class.matches(byte)))
    }
}

impl Render for Mapper {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        for &byte in self.text.as_bytes() {
            match self.resolve(byte) {
                Some(rgb) => {
                    ansi::true_color(w, TrueColor::fore(rgb))?;
                    w.write_all(&[byte])?;
                    ansi::reset(w)?;
                }
                None => w.write_all(&[byte])?,
            }
        }
        Ok(())
    }
}
