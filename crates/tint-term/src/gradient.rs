// SPDX-License-Identifier: MIT
//
// Horizontal gradient: color varies by column, never by row.
//
// One color array is computed per write, `max_len` entries long, and every
// line indexes into it by column. A 3-line block therefore shows the same
// vertical stripes of color on each line:
//
//   steps:   red ─────────── yellow ─────────── green
//   column:  0 1 2 3 4 5 6 7 8 9 ...
//   line 0:  ▓ ▓ ▓ ▓ ▓ ▓ ▓ ▓ ▓ ▓
//   line 1:  ▓ ▓ ▓ ▓ ▓
//   line 2:  ▓ ▓ ▓ ▓ ▓ ▓ ▓ ▓
//
// Interpolation is integer-only. With N steps the width is cut into N-1
// segments of `max_len / (N-1)` columns each, and within a segment every
// channel advances by `(next - cur) / segment_len`, truncated. Integer
// division usually leaves a few columns uncovered; `Fill` decides how they
// are filled. The historical behavior (duplicating random columns) is kept
// as `Fill::Random` with an explicit seed; the default repeats the final
// color so the same input always renders the same bytes.

use std::io::{self, Write};

use crate::ansi;
use crate::color::Rgb;
use crate::decoration::TrueColor;
use crate::render::Render;
use crate::rng::{RandomSource, Xorshift32};

// ─── Fill ────────────────────────────────────────────────────────────────────

/// How columns left over by integer segment division are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// Repeat the last interpolated color until the array is full.
    #[default]
    RepeatLast,

    /// Hand the leftover columns to the leading segments, one each, and
    /// interpolate every segment over its own length.
    Spread,

    /// Duplicate a uniformly random entry in place until the array is full.
    /// Output shape depends on the seed.
    Random { seed: u32 },
}

impl Fill {
    /// Parse `last`, `spread` or `random` (seeded with `seed`).
    #[must_use]
    pub fn from_name(name: &str, seed: u32) -> Option<Self> {
        match name {
            "last" => Some(Self::RepeatLast),
            "spread" => Some(Self::Spread),
            "random" => Some(Self::Random { seed }),
            _ => None,
        }
    }
}

/// Fill policy with the random source resolved.
enum Padding<'a> {
    RepeatLast,
    Spread,
    Random(&'a mut dyn RandomSource),
}

// ─── Gradient ────────────────────────────────────────────────────────────────

/// Multi-line text painted with a horizontal color ramp.
///
/// ```
/// use tint_term::color::Rgb;
/// use tint_term::gradient::Gradient;
///
/// let steps = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
/// let g = Gradient::new("ab\ncd", &steps);
/// assert_eq!(g.max_len(), 2);
/// assert_eq!(g.columns(), steps.to_vec());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    steps: Vec<Rgb>,
    lines: Vec<String>,
    max_len: usize,
    fill: Fill,
}

impl Gradient {
    /// Split `text` into lines on `\n`. A trailing `\n` does not start an
    /// extra empty line, and empty text has no lines at all.
    #[must_use]
    pub fn new(text: &str, steps: &[Rgb]) -> Self {
        Self::from_lines(text.split_terminator('\n'), steps)
    }

    /// Build from explicit lines.
    #[must_use]
    pub fn from_lines<I, S>(lines: I, steps: &[Rgb]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let max_len = lines.iter().map(String::len).max().unwrap_or(0);
        Self {
            steps: steps.to_vec(),
            lines,
            max_len,
            fill: Fill::default(),
        }
    }

    /// The same gradient with a different fill policy.
    #[must_use]
    pub const fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Rgb] {
        &self.steps
    }

    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length in bytes of the longest line: the width of the color array.
    #[inline]
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    #[must_use]
    pub const fn fill(&self) -> Fill {
        self.fill
    }

    /// The per-column color array, exactly [`max_len`](Self::max_len) long.
    #[must_use]
    pub fn columns(&self) -> Vec<Rgb> {
        match self.fill {
            Fill::RepeatLast => self.build(Padding::RepeatLast),
            Fill::Spread => self.build(Padding::Spread),
            Fill::Random { seed } => self.build(Padding::Random(&mut Xorshift32::new(seed))),
        }
    }

    /// The column array using random duplication fed by `rng`, whatever
    /// the configured fill.
    #[must_use]
    pub fn columns_with(&self, rng: &mut impl RandomSource) -> Vec<Rgb> {
        self.build(Padding::Random(rng))
    }

    fn build(&self, padding: Padding<'_>) -> Vec<Rgb> {
        let width = self.max_len;
        let steps = &self.steps;

        if steps.len() == width {
            return steps.clone();
        }
        match steps.as_slice() {
            [] => return vec![Rgb::WHITE; width],
            [only] => return vec![*only; width],
            _ => {}
        }

        let segments = steps.len() - 1;
        let segment_len = width / segments;
        if segment_len == 0 {
            return sample(steps, width);
        }

        let mut cols = Vec::with_capacity(width);
        match padding {
            Padding::RepeatLast => {
                interpolate(steps, |_| segment_len, &mut cols);
                if let Some(&last) = cols.last() {
                    cols.resize(width, last);
                }
            }
            Padding::Spread => {
                let extra = width % segments;
                interpolate(steps, |i| segment_len + usize::from(i < extra), &mut cols);
            }
            Padding::Random(rng) => {
                interpolate(steps, |_| segment_len, &mut cols);
                while cols.len() < width {
                    let i = rng.next_index(cols.len());
                    cols.insert(i, cols[i]);
                }
            }
        }
        cols
    }
}

/// Walk each step pair, pushing `len_of(segment)` integer-interpolated colors.
fn interpolate(steps: &[Rgb], len_of: impl Fn(usize) -> usize, out: &mut Vec<Rgb>) {
    for (i, pair) in steps.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let len = len_of(i);
        let div = i32::try_from(len).unwrap_or(i32::MAX);
        let delta = |a: u8, b: u8| (i32::from(b) - i32::from(a)) / div;
        let (dr, dg, db) = (delta(from.r, to.r), delta(from.g, to.g), delta(from.b, to.b));

        let mut cur = [i32::from(from.r), i32::from(from.g), i32::from(from.b)];
        for _ in 0..len {
            out.push(Rgb::new(channel(cur[0]), channel(cur[1]), channel(cur[2])));
            cur[0] += dr;
            cur[1] += dg;
            cur[2] += db;
        }
    }
}

/// Cumulative deltas stay between the two endpoints, so this never clamps
/// in practice.
fn channel(v: i32) -> u8 {
    u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// More steps than columns: pick evenly spaced steps, first and last included.
fn sample(steps: &[Rgb], width: usize) -> Vec<Rgb> {
    if width <= 1 {
        return steps.iter().copied().take(width).collect();
    }
    let last = steps.len() - 1;
    (0..width).map(|j| steps[j * last / (width - 1)]).collect()
}

impl Render for Gradient {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        if self.lines.is_empty() || self.max_len == 0 {
            return Ok(());
        }

        let cols = self.columns();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                w.write_all(b"\n")?;
            }
            for (&byte, &rgb) in line.as_bytes().iter().zip(&cols) {
                ansi::true_color(w, TrueColor::fore(rgb))?;
                w.write_all(&[byte])?;
            }
        }

        ansi::reset(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const YELLOW: Rgb = Rgb::new(255, 255, 0);

    fn fg(rgb: Rgb) -> String {
        format!("\x1b[38;2;{:03};{:03};{:03}m", rgb.r, rgb.g, rgb.b)
    }

    fn render_str(g: &Gradient) -> String {
        String::from_utf8(g.render()).unwrap()
    }

    fn reds(values: &[u8]) -> Vec<Rgb> {
        values.iter().map(|&r| Rgb::new(r, 0, 0)).collect()
    }

    /// Always picks index 0.
    struct FirstIndex;

    impl RandomSource for FirstIndex {
        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn split_on_line_feed() {
        let g = Gradient::new("abc\nde\n", &[]);
        assert_eq!(g.lines(), &["abc".to_string(), "de".to_string()]);
        assert_eq!(g.max_len(), 3);
    }

    #[test]
    fn empty_lines_in_the_middle_survive() {
        let g = Gradient::new("a\n\nb", &[]);
        assert_eq!(g.lines().len(), 3);
    }

    #[test]
    fn explicit_lines_record_max_len() {
        let g = Gradient::from_lines(["ab", "abcde", ""], &[RED]);
        assert_eq!(g.max_len(), 5);
        assert_eq!(g.lines().len(), 3);
    }

    // ── Column Array ────────────────────────────────────────────────────

    #[test]
    fn exact_fit_uses_steps_verbatim() {
        let steps = [RED, GREEN, BLUE, YELLOW];
        let g = Gradient::from_lines(["abcd", "efgh"], &steps);
        assert_eq!(g.columns(), steps.to_vec());

        let row = |s: &str| -> String {
            s.chars().zip(steps).map(|(c, rgb)| format!("{}{c}", fg(rgb))).collect()
        };
        assert_eq!(
            render_str(&g),
            format!("{}\n{}\x1b[0m", row("abcd"), row("efgh"))
        );
    }

    #[test]
    fn single_step_is_uniform() {
        let g = Gradient::new("hello\nhi", &[GREEN]);
        assert_eq!(g.columns(), vec![GREEN; 5]);
        let out = render_str(&g);
        assert_eq!(out.matches(&fg(GREEN)).count(), 7);
    }

    #[test]
    fn no_steps_is_white() {
        let g = Gradient::new("abc", &[]);
        assert_eq!(g.columns(), vec![Rgb::WHITE; 3]);
        assert_eq!(
            render_str(&g),
            format!("{w}a{w}b{w}c\x1b[0m", w = fg(Rgb::new(255, 255, 255)))
        );
    }

    #[test]
    fn integer_interpolation() {
        let g = Gradient::new("0123456789", &[Rgb::BLACK, Rgb::new(10, 20, 30)]);
        let expected: Vec<Rgb> = (0..10u8).map(|k| Rgb::new(k, 2 * k, 3 * k)).collect();
        assert_eq!(g.columns(), expected);
    }

    #[test]
    fn descending_delta_truncates_toward_zero() {
        // -10 / 4 = -2 (not -3).
        let g = Gradient::new("abcd", &[Rgb::new(10, 10, 10), Rgb::BLACK]);
        let cols: Vec<u8> = g.columns().iter().map(|c| c.r).collect();
        assert_eq!(cols, vec![10, 8, 6, 4]);
    }

    #[test]
    fn repeat_last_pads_with_final_color() {
        let g = Gradient::new("abcdefg", &reds(&[0, 30, 60]));
        assert_eq!(g.columns(), reds(&[0, 10, 20, 30, 40, 50, 50]));
    }

    #[test]
    fn spread_gives_leftover_to_leading_segments() {
        let g = Gradient::new("abcdefg", &reds(&[0, 30, 60])).with_fill(Fill::Spread);
        assert_eq!(g.columns(), reds(&[0, 7, 14, 21, 30, 40, 50]));
    }

    #[test]
    fn spread_segments_start_on_their_step() {
        let steps = reds(&[0, 100, 200, 250]);
        let g = Gradient::new("abcdefghijk", &steps).with_fill(Fill::Spread);
        let cols = g.columns();
        // 11 columns over 3 segments: lengths 4, 4, 3.
        assert_eq!(cols.len(), 11);
        assert_eq!(cols[0], steps[0]);
        assert_eq!(cols[4], steps[1]);
        assert_eq!(cols[8], steps[2]);
    }

    #[test]
    fn random_fill_with_injected_source() {
        let g = Gradient::new("abcdefg", &reds(&[0, 30, 60]));
        assert_eq!(
            g.columns_with(&mut FirstIndex),
            reds(&[0, 0, 10, 20, 30, 40, 50])
        );
    }

    #[test]
    fn random_fill_is_reproducible_per_seed() {
        let text = "a fairly long line of text for padding";
        let steps = reds(&[0, 50, 100, 150, 200, 250, 255]);
        let a = Gradient::new(text, &steps).with_fill(Fill::Random { seed: 9 });
        let b = Gradient::new(text, &steps).with_fill(Fill::Random { seed: 9 });
        assert_eq!(a.columns(), b.columns());
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn uneven_division_always_reaches_width() {
        let steps = [RED, GREEN, BLUE, YELLOW, RED];
        for width in 1..40 {
            let text = "x".repeat(width);
            for fill in [
                Fill::RepeatLast,
                Fill::Spread,
                Fill::Random { seed: 1 },
                Fill::Random { seed: 1234 },
            ] {
                let g = Gradient::new(&text, &steps).with_fill(fill);
                assert_eq!(g.columns().len(), width, "width {width}, {fill:?}");
            }
        }
    }

    #[test]
    fn more_steps_than_columns_samples_evenly() {
        let steps = reds(&[0, 1, 2, 3, 4]);
        assert_eq!(Gradient::new("ab", &steps).columns(), reds(&[0, 4]));
        assert_eq!(Gradient::new("abc", &steps).columns(), reds(&[0, 2, 4]));
        assert_eq!(Gradient::new("a", &steps).columns(), reds(&[0]));
    }

    // ── Rendering ───────────────────────────────────────────────────────

    #[test]
    fn empty_input_writes_nothing() {
        assert!(Gradient::new("", &[RED, BLUE]).render().is_empty());
        assert!(Gradient::from_lines(Vec::<String>::new(), &[RED]).render().is_empty());
        assert!(Gradient::from_lines(["", ""], &[RED]).render().is_empty());
    }

    #[test]
    fn short_lines_render_fewer_columns() {
        let g = Gradient::new("ab\na", &[RED, BLUE]);
        assert_eq!(
            render_str(&g),
            format!("{}a{}b\n{}a\x1b[0m", fg(RED), fg(BLUE), fg(RED))
        );
    }

    #[test]
    fn blank_line_keeps_its_separator() {
        let g = Gradient::new("a\n\nb", &[GREEN]);
        assert_eq!(
            render_str(&g),
            format!("{g}a\n\n{g}b\x1b[0m", g = fg(GREEN))
        );
    }

    #[test]
    fn single_trailing_reset_no_per_character_reset() {
        let g = Gradient::new("abcdef\nghi", &[RED, GREEN, BLUE]);
        let out = render_str(&g);
        assert!(out.ends_with("\x1b[0m"));
        assert_eq!(out.matches("\x1b[0m").count(), 1);
        assert_eq!(out.matches("\x1b[38;2;").count(), 9);
    }

    #[test]
    fn fill_names() {
        assert_eq!(Fill::from_name("last", 0), Some(Fill::RepeatLast));
        assert_eq!(Fill::from_name("spread", 0), Some(Fill::Spread));
        assert_eq!(Fill::from_name("random", 5), Some(Fill::Random { seed: 5 }));
        assert_eq!(Fill::from_name("chaos", 0), None);
    }
}
