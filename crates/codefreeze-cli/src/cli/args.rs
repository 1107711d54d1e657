//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to compile (positional, required).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Source file to compile")
}

/// Output file (-o/--output).
pub fn output_path_arg() -> Arg {
    Arg::new("output_path")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the artifact to FILE instead of stdout")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, repeatable). Applies to every subcommand.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log verbosity (-v info, -vv debug, -vvv trace)")
}
