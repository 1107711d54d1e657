//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use codefreeze_lib::Output;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::freeze::FreezeArgs;

pub struct FreezeParams {
    pub source_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub color: ColorChoice,
}

impl FreezeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: source_path(m),
            output_path: m.get_one::<PathBuf>("output_path").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<FreezeParams> for FreezeArgs {
    fn from(p: FreezeParams) -> Self {
        Self {
            source_path: p.source_path,
            output: Output::from_path(p.output_path),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub source_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: source_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            source_path: p.source_path,
            color: p.color.should_colorize(),
        }
    }
}

/// Number of `-v` flags given anywhere on the command line.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

// Required by the arg definition, so clap has already rejected a missing one.
fn source_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("source_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
