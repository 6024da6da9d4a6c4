// SPDX-License-Identifier: MIT
//
// tint-term — ANSI decoration engine for tint.
//
// Turns plain text into terminal-ready bytes. At the bottom sits a pure
// escape codec (named colors, styles, cursor moves, 24-bit TrueColor);
// on top of it three renderers share one `Render` contract:
//
//   DecoratedText → one run of text under one decoration, then a reset
//   Mapper        → every byte colored by override or character class
//   Gradient      → multi-line text under a horizontal color ramp
//
// Everything works on single bytes. Output goes to any `io::Write`; the
// crate never reads from the terminal and never negotiates capabilities.

pub mod ansi;
pub mod color;
pub mod decoration;
pub mod gradient;
pub mod mapper;
pub mod render;
pub mod rng;
pub mod terminal;
pub mod text;

pub use color::{Ground, NamedColor, Rgb};
pub use decoration::Decoration;
pub use gradient::{Fill, Gradient};
pub use mapper::{CharClass, Mapper, Rule, Rules};
pub use render::Render;
pub use text::DecoratedText;
