//! Command-line flag grammar.
//!
//! Flags are single-dash words read strictly left to right. Each one takes a
//! fixed number of following tokens; anything that is not a known flag is the
//! path to the world save. The grammar lives in [`FLAGS`] so every flag can be
//! listed in the usage text and tested on its own.
//!
//! Tokens stay OS strings: flags and numbers are matched on their text, paths
//! are built from the raw bytes.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::boundary::Orientation;
use crate::dimension::Dimension;
use crate::error::SettingsError;
use crate::settings::WorldOptions;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Flags applied; the options still need [`crate::resolve`].
    Options(Box<WorldOptions>),
    /// `-help`/`-h`: print usage and stop. Not an error.
    Help,
}

enum Step {
    Continue,
    Help,
}

/// One occurrence of a flag together with the tokens it consumed.
struct Invocation<'a> {
    flag: &'static str,
    args: &'a [&'a OsStr],
}

impl<'a> Invocation<'a> {
    fn int(&self, idx: usize) -> Result<i64, SettingsError> {
        let raw = self.text(idx);
        raw.parse::<i64>().map_err(|_| self.out_of_range(idx))
    }

    fn i32(&self, idx: usize) -> Result<i32, SettingsError> {
        let value = self.int(idx)?;
        i32::try_from(value).map_err(|_| self.out_of_range(idx))
    }

    fn u16(&self, idx: usize) -> Result<u16, SettingsError> {
        let value = self.int(idx)?;
        u16::try_from(value).map_err(|_| self.out_of_range(idx))
    }

    fn text(&self, idx: usize) -> Cow<'a, str> {
        let raw: &'a OsStr = self.args[idx];
        raw.to_string_lossy()
    }

    fn path(&self, idx: usize) -> PathBuf {
        PathBuf::from(self.args[idx])
    }

    fn out_of_range(&self, idx: usize) -> SettingsError {
        SettingsError::OutOfRange {
            flag: self.flag,
            value: self.text(idx).into_owned(),
        }
    }

    fn invalid(&self, expected: &'static str) -> SettingsError {
        SettingsError::InvalidArgument {
            flag: self.flag,
            expected,
        }
    }
}

type Apply = fn(&mut WorldOptions, &Invocation<'_>) -> Result<Step, SettingsError>;

/// Grammar entry for a single flag.
pub struct Flag {
    pub names: &'static [&'static str],
    /// Tokens consumed after the flag itself.
    pub arity: usize,
    /// How many of those, from the front, must pass [`is_numeric`].
    pub numeric: usize,
    /// Completes "`<flag>` needs ..." when arguments are missing or malformed.
    pub expected: &'static str,
    pub synopsis: &'static str,
    pub help: &'static str,
    apply: Apply,
}

pub static FLAGS: &[Flag] = &[
    Flag {
        names: &["-from"],
        arity: 2,
        numeric: 2,
        expected: "two integer arguments",
        synopsis: "-from X Z",
        help: "first corner of the area to render",
        apply: apply_from,
    },
    Flag {
        names: &["-to"],
        arity: 2,
        numeric: 2,
        expected: "two integer arguments",
        synopsis: "-to X Z",
        help: "opposite corner of the area to render",
        apply: apply_to,
    },
    Flag {
        names: &["-min"],
        arity: 1,
        numeric: 1,
        expected: "an integer argument",
        synopsis: "-min Y",
        help: "lowest layer to draw",
        apply: apply_min,
    },
    Flag {
        names: &["-max"],
        arity: 1,
        numeric: 1,
        expected: "an integer argument",
        synopsis: "-max Y",
        help: "highest layer to draw",
        apply: apply_max,
    },
    Flag {
        names: &["-splits"],
        arity: 1,
        numeric: 1,
        expected: "a positive integer argument",
        synopsis: "-splits N",
        help: "render in N slices to save memory",
        apply: apply_splits,
    },
    Flag {
        names: &["-padding"],
        arity: 1,
        numeric: 1,
        expected: "a non-negative integer argument",
        synopsis: "-padding N",
        help: "empty pixels around the map",
        apply: apply_padding,
    },
    Flag {
        names: &["-nowater"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-nowater",
        help: "do not draw water",
        apply: apply_nowater,
    },
    Flag {
        names: &["-nobeacons"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-nobeacons",
        help: "do not draw beacon beams",
        apply: apply_nobeacons,
    },
    Flag {
        names: &["-shading"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-shading",
        help: "shade blocks by height",
        apply: apply_shading,
    },
    Flag {
        names: &["-nether"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-nether",
        help: "render the nether",
        apply: apply_nether,
    },
    Flag {
        names: &["-end"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-end",
        help: "render the end",
        apply: apply_end,
    },
    Flag {
        names: &["-dimension", "-dim"],
        arity: 1,
        numeric: 0,
        expected: "one argument",
        synopsis: "-dimension [NS:]ID",
        help: "render any dimension, e.g. the_end or mymod:caves",
        apply: apply_dimension,
    },
    Flag {
        names: &["-file"],
        arity: 1,
        numeric: 0,
        expected: "one argument",
        synopsis: "-file PATH",
        help: "output image (default output.png)",
        apply: apply_file,
    },
    Flag {
        names: &["-colors"],
        arity: 1,
        numeric: 0,
        expected: "one argument",
        synopsis: "-colors PATH",
        help: "color table to use",
        apply: apply_colors,
    },
    Flag {
        names: &["-marker"],
        arity: 3,
        numeric: 2,
        expected: "three arguments: x z color",
        synopsis: "-marker X Z COLOR",
        help: "draw a marker at X Z",
        apply: apply_marker,
    },
    Flag {
        names: &["-mem"],
        arity: 1,
        numeric: 1,
        expected: "a positive integer argument",
        synopsis: "-mem MB",
        help: "memory limit in megabytes",
        apply: apply_mem,
    },
    Flag {
        names: &["-nw"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-nw",
        help: "north-west at the top (default)",
        apply: apply_nw,
    },
    Flag {
        names: &["-sw"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-sw",
        help: "south-west at the top",
        apply: apply_sw,
    },
    Flag {
        names: &["-ne"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-ne",
        help: "north-east at the top",
        apply: apply_ne,
    },
    Flag {
        names: &["-se"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-se",
        help: "south-east at the top",
        apply: apply_se,
    },
    Flag {
        names: &["-3"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-3",
        help: "use the 3-pixel layer offset",
        apply: apply_offset,
    },
    Flag {
        names: &["-help", "-h"],
        arity: 0,
        numeric: 0,
        expected: "no argument",
        synopsis: "-help, -h",
        help: "show this message",
        apply: apply_help,
    },
];

fn apply_from(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.set_from(inv.i32(0)?, inv.i32(1)?);
    Ok(Step::Continue)
}

fn apply_to(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.set_to(inv.i32(0)?, inv.i32(1)?);
    Ok(Step::Continue)
}

fn apply_min(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    // Out-of-range heights clamp rather than fail, so saturate huge values too.
    let height = inv.int(0)?.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    opts.boundary.set_min_y(height);
    Ok(Step::Continue)
}

fn apply_max(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    let height = inv.int(0)?.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    opts.boundary.set_max_y(height);
    Ok(Step::Continue)
}

fn apply_splits(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    if inv.int(0)? < 1 {
        return Err(inv.invalid("a positive integer argument"));
    }
    opts.splits = inv.u16(0)?;
    Ok(Step::Continue)
}

fn apply_padding(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    if inv.int(0)? < 0 {
        return Err(inv.invalid("a non-negative integer argument"));
    }
    opts.padding = inv.u16(0)?;
    Ok(Step::Continue)
}

fn apply_nowater(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.hide_water = true;
    Ok(Step::Continue)
}

fn apply_nobeacons(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.hide_beacons = true;
    Ok(Step::Continue)
}

fn apply_shading(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.shading = true;
    Ok(Step::Continue)
}

fn apply_nether(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.dimension = Dimension::nether();
    Ok(Step::Continue)
}

fn apply_end(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.dimension = Dimension::end();
    Ok(Step::Continue)
}

fn apply_dimension(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.dimension = Dimension::parse(&inv.text(0));
    Ok(Step::Continue)
}

fn apply_file(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.out_file = inv.path(0);
    Ok(Step::Continue)
}

fn apply_colors(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.color_file = existing_path(inv.path(0))?;
    Ok(Step::Continue)
}

fn apply_marker(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.markers.push(inv.i32(0)?, inv.i32(1)?, inv.text(2))?;
    Ok(Step::Continue)
}

fn apply_mem(opts: &mut WorldOptions, inv: &Invocation<'_>) -> Result<Step, SettingsError> {
    let megabytes = inv.int(0)?;
    if megabytes < 1 {
        return Err(inv.invalid("a positive integer argument"));
    }
    opts.set_mem_limit_mb(megabytes as u64);
    Ok(Step::Continue)
}

fn apply_nw(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.orientation = Orientation::NW;
    Ok(Step::Continue)
}

fn apply_sw(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.orientation = Orientation::SW;
    Ok(Step::Continue)
}

fn apply_ne(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.orientation = Orientation::NE;
    Ok(Step::Continue)
}

fn apply_se(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.boundary.orientation = Orientation::SE;
    Ok(Step::Continue)
}

fn apply_offset(opts: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    opts.offset_y = crate::settings::OFFSET_Y;
    Ok(Step::Continue)
}

fn apply_help(_: &mut WorldOptions, _: &Invocation<'_>) -> Result<Step, SettingsError> {
    Ok(Step::Help)
}

/// An optional sign followed by at least one ASCII digit.
pub fn is_numeric(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn lookup(token: &str) -> Option<&'static Flag> {
    FLAGS.iter().find(|flag| flag.names.contains(&token))
}

fn existing_path(path: PathBuf) -> Result<PathBuf, SettingsError> {
    if is_path(&path) {
        Ok(path)
    } else {
        Err(SettingsError::MissingFile { path })
    }
}

fn is_path(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.exists()
}

/// Apply `args` (without the program name) on top of `opts`.
///
/// Stops at the first problem without looking at the remaining tokens.
pub fn parse_args<S: AsRef<OsStr>>(
    args: &[S],
    mut opts: WorldOptions,
) -> Result<ParseOutcome, SettingsError> {
    let args: Vec<&OsStr> = args.iter().map(AsRef::as_ref).collect();
    let mut i = 0;
    while i < args.len() {
        let token = args[i];
        // Flag names are ASCII, so a token that is not UTF-8 can only be a path.
        let Some(flag) = token.to_str().and_then(lookup) else {
            opts.save_name = existing_path(PathBuf::from(token))?;
            debug!(save = %opts.save_name.display(), "world path");
            i += 1;
            continue;
        };

        let name = flag.names[0];
        let params = &args[i + 1..];
        let numbers_ok = params
            .iter()
            .take(flag.numeric)
            .all(|p| p.to_str().is_some_and(is_numeric));
        if params.len() < flag.arity || !numbers_ok {
            return Err(SettingsError::InvalidArgument {
                flag: name,
                expected: flag.expected,
            });
        }

        let invocation = Invocation {
            flag: name,
            args: &params[..flag.arity],
        };
        match (flag.apply)(&mut opts, &invocation)? {
            Step::Continue => debug!(flag = name, args = ?invocation.args, "applied"),
            Step::Help => return Ok(ParseOutcome::Help),
        }
        i += 1 + flag.arity;
    }
    Ok(ParseOutcome::Options(Box::new(opts)))
}

/// Usage text generated from [`FLAGS`].
pub fn usage(binary: &str) -> String {
    let width = FLAGS.iter().map(|f| f.synopsis.len()).max().unwrap_or(0);
    let mut out = format!("Usage: {binary} [options] WORLD\n\nOptions:\n");
    for flag in FLAGS {
        out.push_str(&format!("  {:<width$}  {}\n", flag.synopsis, flag.help));
    }
    out
}
