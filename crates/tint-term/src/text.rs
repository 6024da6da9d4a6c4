// SPDX-License-Identifier: MIT
//
// DecoratedText: one run of text under one decoration, always closed.

use std::io::{self, Write};

use crate::ansi;
use crate::decoration::Decoration;
use crate::render::Render;

/// Plain text wrapped in a single escape prefix and a trailing reset.
///
/// The prefix is rendered once at construction. Writing emits the prefix,
/// the text bytes verbatim, then exactly one `ESC[0m`, so every decorated
/// run is balanced no matter what the prefix was.
///
/// ```
/// use tint_term::decoration::lookup;
/// use tint_term::render::Render;
/// use tint_term::text::DecoratedText;
///
/// let warning = DecoratedText::new("careful", &lookup("yellow_bright").unwrap());
/// assert_eq!(warning.render(), b"\x1b[33;1mcareful\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedText {
    text: String,
    prefix: Vec<u8>,
}

impl DecoratedText {
    #[must_use]
    pub fn new(text: impl Into<String>, decoration: &Decoration) -> Self {
        Self {
            text: text.into(),
            prefix: decoration.render(),
        }
    }

    /// The undecorated text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The precomputed escape prefix.
    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

impl Render for DecoratedText {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.prefix)?;
        w.write_all(self.text.as_bytes())?;
        ansi::reset(w)
    }
}
