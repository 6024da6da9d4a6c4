//! Named presets: ready-to-use gradient step lists and mapper rules.
//!
//! Each gradient preset is an ordered list of anchor colors; each map preset
//! is a [`Rules`] value that can be extended before building a `Mapper`.

use tint_term::color::{NamedColor, Rgb};
use tint_term::mapper::{CharClass, Rules};

// ---------------------------------------------------------------------------
// Gradients
// ---------------------------------------------------------------------------

/// Look up a builtin gradient by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_gradient(name: &str) -> Option<Vec<Rgb>> {
    let packed: &[u32] = match name {
        "rainbow" => &[0xFF_00_00, 0xFF_7F_00, 0xFF_FF_00, 0x00_FF_00, 0x00_00_FF, 0x8B_00_FF],
        "sunset" => &[0x5B_2A_86, 0xE8_4A_5F, 0xFF_84_7C, 0xFE_CE_A8],
        "ocean" => &[0x02_3E_8A, 0x00_96_C7, 0x48_CA_E4, 0xAD_E8_F4],
        "fire" => &[0x30_00_00, 0xC0_10_00, 0xFF_6A_00, 0xFF_D0_00, 0xFF_FF_E0],
        "neon" => &[0xFF_00_99, 0x99_00_FF, 0x00_FF_FF],
        "mono" => {
            return Some(vec![Rgb::from(NamedColor::Black), Rgb::from(NamedColor::White)]);
        }
        _ => return None,
    };
    Some(packed.iter().copied().map(Rgb::from_packed).collect())
}

/// List all available builtin gradient names.
#[must_use]
pub const fn gradient_names() -> &'static [&'static str] {
    &["rainbow", "sunset", "ocean", "fire", "neon", "mono"]
}

// ---------------------------------------------------------------------------
// Character maps
// ---------------------------------------------------------------------------

/// Look up a builtin character map by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_rules(name: &str) -> Option<Rules> {
    Some(match name {
        // Source-code flavored: words, numbers and punctuation each stand out.
        "code" => Rules::new()
            .class(CharClass::Alphabetic, Rgb::from_packed(0xC6_D0_F5))
            .class(CharClass::Numeric, Rgb::from_packed(0xEF_9F_76))
            .class(CharClass::Symbolic, Rgb::from_packed(0x81_C8_BE)),
        "digits" => Rules::new().class(CharClass::Numeric, Rgb::from(NamedColor::Yellow)),
        "punct" => Rules::new().class(CharClass::Symbolic, Rgb::from(NamedColor::Magenta)),
        "all" => Rules::new().class(CharClass::Any, Rgb::from(NamedColor::Cyan)),
        _ => return None,
    })
}

/// List all available builtin character map names.
#[must_use]
pub const fn rules_names() -> &'static [&'static str] {
    &["code", "digits", "punct", "all"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
