// SPDX-License-Identifier: MIT
//
// Render: the one contract every decoration and renderer shares.
//
// Output is append-only: implementors push bytes into the writer and never
// read back. Nothing here buffers; hand in a `BufWriter` when the sink is a
// terminal.

use std::io::{self, Write};

/// Something that can write itself as terminal bytes.
pub trait Render {
    /// Append this value's bytes (escape sequences and text) to `w`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()>;

    /// Render into a fresh byte vector.
    fn render(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let written = self.write_to(&mut buf);
        debug_assert!(written.is_ok(), "writing into a Vec cannot fail");
        buf
    }
}
