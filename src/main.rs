// SPDX-License-Identifier: MIT
//
// tint — paint terminal text with ANSI colors, character maps and gradients.
//
// This is the binary that wires the two library crates together:
//
//   tint-theme → named gradient and character-map presets
//   tint-term  → the renderers and the escape codec behind them
//
// Each invocation flows through:
//
//   args → Options → text (args or stdin) → renderer → BufWriter → stdout
//
// Exactly one rendering mode is active per run:
//
//   gradient  (-g / -s)   horizontal color ramp across every line
//   map       (-m / -c)   per-character colors by override or class
//   decorate  (-d)        one named color or style around the whole text
//
// With no mode flag the rainbow gradient is used.

use std::env;
use std::fmt;
use std::io::{self, BufWriter, Read, Write};
use std::process;

use tint_term::color::Rgb;
use tint_term::decoration::{self, Decoration};
use tint_term::gradient::{Fill, Gradient};
use tint_term::mapper::{Mapper, Rule, Rules};
use tint_term::render::Render;
use tint_term::terminal;
use tint_term::text::DecoratedText;
use tint_theme::builtin::{builtin_gradient, builtin_rules, gradient_names, rules_names};

const USAGE: &str = "\
usage: tint [OPTIONS] [TEXT...]

Paint TEXT (or stdin when no TEXT is given) with ANSI colors.

options:
  -g, --gradient NAME       gradient preset (default: rainbow)
  -s, --steps HEX,HEX,...   explicit gradient steps, e.g. ff0000,00f,#00ff00
  -f, --fill MODE           leftover gradient columns: last | spread | random
      --seed N              seed for --fill random (default: 1)
  -m, --map NAME            character-map preset
  -c, --char C=HEX          color one character (repeatable)
  -d, --decorate NAME       wrap the text in one named color or style
      --color WHEN          auto | always | never (default: auto)
      --list                list presets and decoration names
  -h, --help                show this help
";

/// Gradient preset used when no mode flag is given.
const DEFAULT_GRADIENT: &str = "rainbow";

// ─── Options ────────────────────────────────────────────────────────────────

/// When to emit escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ColorWhen {
    /// Only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    const fn enabled(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// The renderer chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Gradient(Vec<Rgb>),
    Map(Rules),
    Decorate(Decoration),
}

/// Fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    mode: Mode,
    fill: Fill,
    color: ColorWhen,
    /// Positional text; `None` means read stdin.
    text: Option<String>,
    list: bool,
    help: bool,
}

/// A command-line problem. Reported as `tint: <message>` with exit status 2.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgError {
    UnknownFlag(String),
    MissingValue(String),
    UnknownGradient(String),
    UnknownMap(String),
    UnknownDecoration(String),
    BadColor(String),
    BadChar(String),
    BadFill(String),
    BadSeed(String),
    BadWhen(String),
    ConflictingModes,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
            Self::MissingValue(flag) => write!(f, "option '{flag}' needs a value"),
            Self::UnknownGradient(name) => write!(f, "unknown gradient '{name}'"),
            Self::UnknownMap(name) => write!(f, "unknown character map '{name}'"),
            Self::UnknownDecoration(name) => write!(f, "unknown decoration '{name}'"),
            Self::BadColor(value) => write!(f, "invalid hex color '{value}'"),
            Self::BadChar(value) => write!(f, "expected C=HEX, got '{value}'"),
            Self::BadFill(value) => write!(f, "unknown fill mode '{value}'"),
            Self::BadSeed(value) => write!(f, "invalid seed '{value}'"),
            Self::BadWhen(value) => write!(f, "expected auto, always or never, got '{value}'"),
            Self::ConflictingModes => {
                f.write_str("choose one of gradient (-g/-s), map (-m/-c) or decorate (-d)")
            }
        }
    }
}

/// Parse a comma-separated list of hex colors.
fn parse_steps(list: &str) -> Result<Vec<Rgb>, ArgError> {
    list.split(',')
        .map(|s| Rgb::hex(s.trim()).ok_or_else(|| ArgError::BadColor(s.to_string())))
        .collect()
}

/// Parse `C=HEX` into an override rule. `C` is exactly one byte.
fn parse_char_rule(arg: &str) -> Result<Rule, ArgError> {
    let bytes = arg.as_bytes();
    if bytes.len() < 3 || bytes[1] != b'=' {
        return Err(ArgError::BadChar(arg.to_string()));
    }
    let hex = &arg[2..];
    let rgb = Rgb::hex(hex).ok_or_else(|| ArgError::BadColor(hex.to_string()))?;
    Ok(Rule::Char(bytes[0], rgb))
}

/// Parse the arguments after the program name.
fn parse_args(args: &[String]) -> Result<Options, ArgError> {
    let mut gradient: Option<Vec<Rgb>> = None;
    let mut map: Option<Rules> = None;
    let mut chars: Vec<Rule> = Vec::new();
    let mut decorate: Option<Decoration> = None;
    let mut fill_name: Option<String> = None;
    let mut seed: u32 = 1;
    let mut color = ColorWhen::default();
    let mut words: Vec<&str> = Vec::new();
    let mut list = false;
    let mut help = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| ArgError::MissingValue(arg.clone()))
        };

        match arg.as_str() {
            "-g" | "--gradient" => {
                let name = value()?;
                let steps =
                    builtin_gradient(name).ok_or_else(|| ArgError::UnknownGradient(name.into()))?;
                gradient = Some(steps);
            }
            "-s" | "--steps" => gradient = Some(parse_steps(value()?)?),
            "-f" | "--fill" => fill_name = Some(value()?.to_string()),
            "--seed" => {
                let v = value()?;
                seed = v.parse().map_err(|_| ArgError::BadSeed(v.to_string()))?;
            }
            "-m" | "--map" => {
                let name = value()?;
                map = Some(builtin_rules(name).ok_or_else(|| ArgError::UnknownMap(name.into()))?);
            }
            "-c" | "--char" => chars.push(parse_char_rule(value()?)?),
            "-d" | "--decorate" => {
                let name = value()?;
                decorate =
                    Some(decoration::lookup(name).ok_or_else(|| ArgError::UnknownDecoration(name.into()))?);
            }
            "--color" => {
                let v = value()?;
                color = ColorWhen::from_name(v).ok_or_else(|| ArgError::BadWhen(v.to_string()))?;
            }
            "--list" => list = true,
            "-h" | "--help" => help = true,
            "--" => {
                words.extend(iter.by_ref().map(String::as_str));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ArgError::UnknownFlag(flag.to_string()));
            }
            word => words.push(word),
        }
    }

    let wants_map = map.is_some() || !chars.is_empty();
    let chosen = usize::from(gradient.is_some()) + usize::from(wants_map) + usize::from(decorate.is_some());
    if chosen > 1 {
        return Err(ArgError::ConflictingModes);
    }

    let mode = decorate.map_or_else(
        || {
            if wants_map {
                let mut rules = map.unwrap_or_default();
                rules.extend(chars);
                Mode::Map(rules)
            } else {
                let steps = gradient.or_else(|| builtin_gradient(DEFAULT_GRADIENT)).unwrap_or_default();
                Mode::Gradient(steps)
            }
        },
        Mode::Decorate,
    );

    let fill = fill_name.map_or_else(|| Ok(Fill::default()), |name| {
        Fill::from_name(&name, seed).ok_or(ArgError::BadFill(name))
    })?;

    let text = if words.is_empty() {
        None
    } else {
        // Like echo: positional text ends with a newline.
        Some(words.join(" ") + "\n")
    };

    Ok(Options {
        mode,
        fill,
        color,
        text,
        list,
        help,
    })
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render `text` through the selected mode into `out`.
///
/// Trailing newlines, however many, are written after the decoration so the
/// terminal's next prompt starts on a clean line.
fn paint(opts: &Options, text: &str, out: &mut impl Write) -> io::Result<()> {
    let body = text.trim_end_matches('\n');
    let newlines = &text[body.len()..];

    match &opts.mode {
        Mode::Gradient(steps) => Gradient::new(body, steps).with_fill(opts.fill).write_to(out)?,
        Mode::Map(rules) => Mapper::new(body, rules).write_to(out)?,
        Mode::Decorate(d) => DecoratedText::new(body, d).write_to(out)?,
    }

    out.write_all(newlines.as_bytes())
}

fn print_list() {
    println!("gradients:   {}", gradient_names().join(" "));
    println!("maps:        {}", rules_names().join(" "));
    println!("decorations: {}", decoration::names().join(" "));
}

fn run(opts: &Options) -> io::Result<()> {
    terminal::init()?;

    let text = opts.text.clone().map_or_else(read_stdin, Ok)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if opts.color.enabled(terminal::stdout_is_tty()) {
        paint(opts, &text, &mut out)?;
    } else {
        out.write_all(text.as_bytes())?;
    }
    out.flush()
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("tint: {e}");
        eprintln!("try 'tint --help'");
        process::exit(2);
    });

    if opts.help {
        print!("{USAGE}");
        return;
    }
    if opts.list {
        print_list();
        return;
    }

    if let Err(e) = run(&opts) {
        eprintln!("tint: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_term::decoration::Style;
    use tint_term::mapper::CharClass;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn parse(args: &[&str]) -> Result<Options, ArgError> {
        let owned: Vec<String> = args.iter().map(|s| (*s).to_string()).collect();
        parse_args(&owned)
    }

    fn painted(opts: &Options, text: &str) -> String {
        let mut out = Vec::new();
        paint(opts, text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn defaults_to_rainbow_gradient_from_stdin() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.mode, Mode::Gradient(builtin_gradient("rainbow").unwrap()));
        assert_eq!(opts.fill, Fill::RepeatLast);
        assert_eq!(opts.color, ColorWhen::Auto);
        assert_eq!(opts.text, None);
    }

    #[test]
    fn positional_words_join_with_newline() {
        let opts = parse(&["hello", "world"]).unwrap();
        assert_eq!(opts.text.as_deref(), Some("hello world\n"));
    }

    #[test]
    fn double_dash_ends_options() {
        let opts = parse(&["--", "-g", "x"]).unwrap();
        assert_eq!(opts.text.as_deref(), Some("-g x\n"));
    }

    #[test]
    fn explicit_steps() {
        let opts = parse(&["-s", "ff0000, #00f"]).unwrap();
        assert_eq!(
            opts.mode,
            Mode::Gradient(vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)])
        );
    }

    #[test]
    fn fill_with_seed() {
        let opts = parse(&["--seed", "42", "-f", "random"]).unwrap();
        assert_eq!(opts.fill, Fill::Random { seed: 42 });
    }

    #[test]
    fn map_preset_extended_by_chars() {
        let opts = parse(&["-m", "digits", "-c", "x=00ff00"]).unwrap();
        let expected = builtin_rules("digits")
            .unwrap()
            .char(b'x', Rgb::new(0, 255, 0));
        assert_eq!(opts.mode, Mode::Map(expected));
    }

    #[test]
    fn chars_alone_select_map_mode() {
        let opts = parse(&["-c", "==ff0000"]).unwrap();
        assert_eq!(opts.mode, Mode::Map(Rules::new().char(b'=', Rgb::new(255, 0, 0))));
    }

    #[test]
    fn decorate_mode() {
        let opts = parse(&["-d", "bold"]).unwrap();
        assert_eq!(opts.mode, Mode::Decorate(Decoration::Style(Style::Bold)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse(&["--nope"]), Err(ArgError::UnknownFlag("--nope".into())));
        assert_eq!(parse(&["-g"]), Err(ArgError::MissingValue("-g".into())));
        assert_eq!(parse(&["-g", "plaid"]), Err(ArgError::UnknownGradient("plaid".into())));
        assert_eq!(parse(&["-m", "plaid"]), Err(ArgError::UnknownMap("plaid".into())));
        assert_eq!(parse(&["-d", "plaid"]), Err(ArgError::UnknownDecoration("plaid".into())));
        assert_eq!(parse(&["-s", "ff0000,zz"]), Err(ArgError::BadColor("zz".into())));
        assert_eq!(parse(&["-c", "ab=ff0000"]), Err(ArgError::BadChar("ab=ff0000".into())));
        assert_eq!(parse(&["-f", "chaos"]), Err(ArgError::BadFill("chaos".into())));
        assert_eq!(parse(&["--seed", "-1"]), Err(ArgError::BadSeed("-1".into())));
        assert_eq!(parse(&["--color", "maybe"]), Err(ArgError::BadWhen("maybe".into())));
    }

    #[test]
    fn rejects_two_modes() {
        assert_eq!(parse(&["-g", "fire", "-d", "red"]), Err(ArgError::ConflictingModes));
        assert_eq!(parse(&["-s", "fff,000", "-c", "a=fff"]), Err(ArgError::ConflictingModes));
    }

    #[test]
    fn lone_dash_is_text() {
        let opts = parse(&["-"]).unwrap();
        assert_eq!(opts.text.as_deref(), Some("-\n"));
    }

    #[test]
    fn color_when() {
        assert!(ColorWhen::Auto.enabled(true));
        assert!(!ColorWhen::Auto.enabled(false));
        assert!(ColorWhen::Always.enabled(false));
        assert!(!ColorWhen::Never.enabled(true));
    }

    // ── Painting ──────────────────────────────────────────────────────────

    #[test]
    fn gradient_keeps_trailing_newline_outside() {
        let opts = parse(&["-s", "ff0000,0000ff"]).unwrap();
        assert_eq!(
            painted(&opts, "ab\n"),
            "\x1b[38;2;255;000;000ma\x1b[38;2;000;000;255mb\x1b[0m\n"
        );
    }

    #[test]
    fn gradient_keeps_every_trailing_newline() {
        let opts = parse(&["-s", "ff0000"]).unwrap();
        let red_a = "\x1b[38;2;255;000;000ma\x1b[0m";
        assert_eq!(painted(&opts, "a\n\n"), format!("{red_a}\n\n"));
        assert_eq!(painted(&opts, "a\n\n\n"), format!("{red_a}\n\n\n"));
    }

    #[test]
    fn trailing_newlines_match_across_modes() {
        for args in [&["-s", "ff0000"][..], &["-c", "a=ff0000"], &["-d", "bold"]] {
            let opts = parse(args).unwrap();
            let out = painted(&opts, "a\n\n");
            assert!(out.ends_with("\x1b[0m\n\n"), "{args:?}: {out:?}");
        }
    }

    #[test]
    fn only_newlines_pass_through() {
        let opts = parse(&[]).unwrap();
        assert_eq!(painted(&opts, "\n\n"), "\n\n");
    }

    #[test]
    fn decorate_wraps_body() {
        let opts = parse(&["-d", "red_bright"]).unwrap();
        assert_eq!(painted(&opts, "hi\n"), "\x1b[31;1mhi\x1b[0m\n");
    }

    #[test]
    fn map_colors_matching_characters() {
        let opts = Options {
            mode: Mode::Map(Rules::new().class(CharClass::Numeric, Rgb::new(1, 2, 3))),
            ..parse(&[]).unwrap()
        };
        assert_eq!(painted(&opts, "a1"), "a\x1b[38;2;001;002;003m1\x1b[0m");
    }

    #[test]
    fn empty_text_paints_nothing() {
        let opts = parse(&[]).unwrap();
        assert_eq!(painted(&opts, ""), "");
    }

    #[test]
    fn errors_display_readably() {
        assert_eq!(
            ArgError::MissingValue("--seed".into()).to_string(),
            "option '--seed' needs a value"
        );
    }
}
