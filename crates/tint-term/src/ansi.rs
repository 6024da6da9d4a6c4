// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit; that's the renderers' job. This module
// just knows the byte-level encoding of every decoration we support.
//
// All functions return `io::Result` propagated from the underlying writer.
// Writing into a `Vec<u8>` never fails.
use std::io::{self, Write};

use crate::decoration::{ColorCode, Move, Style, TrueColor};

/// The universal terminator (SGR 0). Every renderer closes its output with it.
pub const RESET: &[u8] = b"\x1b[0m";

// ─── Named Colors ────────────────────────────────────────────────────────────

/// Set one of the 8 named colors: `ESC[<ground><color>m`, with `;1`
/// appended before the `m` when the color is bright.
///
/// Bright red foreground is `\x1b[31;1m`; black background is `\x1b[40m`.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn color(w: &mut (impl Write + ?Sized), code: ColorCode) -> io::Result<()> {
    let seq = [
        0x1b,
        b'[',
        b'0' + code.ground.digit(),
        b'0' + code.color.digit(),
    ];
    w.write_all(&seq)?;
    if code.bright {
        w.write_all(b";1")?;
    }
    w.write_all(b"m")
}

// ─── Styles ──────────────────────────────────────────────────────────────────

/// Emit a single style code: `ESC[<code>m`.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn style(w: &mut (impl Write + ?Sized), style: Style) -> io::Result<()> {
    w.write_all(&[0x1b, b'[', b'0' + style.code(), b'm'])
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
#[inline]
pub fn reset(w: &mut (impl Write + ?Sized)) -> io::Result<()> {
    w.write_all(RESET)
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor relative to its position: CUU/CUD/CUF/CUB.
///
/// The count is plain decimal without padding (`\x1b[12A`). A count of 0
/// is written as-is; most terminals treat it as 1.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn cursor_move(w: &mut (impl Write + ?Sized), mv: Move) -> io::Result<()> {
    write!(w, "\x1b[{}", mv.count)?;
    w.write_all(&[mv.direction.letter()])
}

// ─── TrueColor ───────────────────────────────────────────────────────────────

/// Set a 24-bit color: `ESC[38;2;RRR;GGG;BBBm` (or `48` for background).
///
/// Channels are always three digits, zero-padded: `(255, 10, 0)` becomes
/// `255;010;000`. Terminals parse either form; the fixed width keeps every
/// TrueColor sequence the same length.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn true_color(w: &mut (impl Write + ?Sized), tc: TrueColor) -> io::Result<()> {
    let TrueColor { rgb, ground } = tc;
    write!(
        w,
        "\x1b[{}8;2;{:03};{:03};{:03}m",
        ground.digit(),
        rgb.r,
        rgb.g,
        rgb.b
    )
}
