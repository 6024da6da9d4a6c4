//! # tint-theme — preset gradients and character maps
//!
//! Named, ready-made inputs for the renderers in `tint-term`:
//!
//! ```text
//! builtin_gradient("sunset") ──► Vec<Rgb> ──► Gradient::new(text, &steps)
//! builtin_rules("code")      ──► Rules    ──► Mapper::new(text, &rules)
//! ```
//!
//! Presets are plain data. Nothing here renders; callers pick a preset,
//! optionally extend it, and hand it to the renderer they want.

pub mod builtin;

pub use builtin::{builtin_gradient, builtin_rules, gradient_names, rules_names};
