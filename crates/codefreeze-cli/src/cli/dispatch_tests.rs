//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use codefreeze_lib::Output;

use super::*;
use crate::cli::commands::{dump_command, freeze_command};
use crate::commands::freeze::FreezeArgs;

#[test]
fn freeze_requires_source() {
    let result = freeze_command().try_get_matches_from(["freeze"]);
    assert!(result.is_err());
}

#[test]
fn freeze_defaults_to_stdout() {
    let m = freeze_command()
        .try_get_matches_from(["freeze", "hello.py"])
        .unwrap();
    let params = FreezeParams::from_matches(&m);

    assert_eq!(params.source_path, PathBuf::from("hello.py"));
    assert_eq!(params.output_path, None);
    assert_eq!(params.color, ColorChoice::Auto);

    let args: FreezeArgs = params.into();
    assert_eq!(args.output, Output::Stdout);
}

#[test]
fn freeze_output_short_and_long() {
    for flag in ["-o", "--output"] {
        let m = freeze_command()
            .try_get_matches_from(["freeze", "hello.py", flag, "frozen.c"])
            .unwrap();
        let args: FreezeArgs = FreezeParams::from_matches(&m).into();
        assert_eq!(args.output, Output::File(PathBuf::from("frozen.c")));
    }
}

#[test]
fn freeze_rejects_extra_positional() {
    let result = freeze_command().try_get_matches_from(["freeze", "a.py", "b.c"]);
    assert!(result.is_err());
}

#[test]
fn color_values() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a.py", "--color", "never"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Never);

    let m = dump_command()
        .try_get_matches_from(["dump", "a.py", "--color", "always"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Always);

    let result = dump_command().try_get_matches_from(["dump", "a.py", "--color", "rainbow"]);
    assert!(result.is_err());
}

#[test]
fn verbose_is_global_and_counted() {
    let m = build_cli()
        .try_get_matches_from(["codefreeze", "freeze", "a.py", "-vv"])
        .unwrap();
    assert_eq!(verbosity(&m), 2);

    let m = build_cli()
        .try_get_matches_from(["codefreeze", "-v", "dump", "a.py"])
        .unwrap();
    assert_eq!(verbosity(&m), 1);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["codefreeze"]).is_err());
}

#[test]
fn freeze_help_lists_options() {
    let help = freeze_command().render_help().to_string();

    assert!(help.contains("<SOURCE>"), "{help}");
    assert!(help.contains("-o, --output <FILE>"), "{help}");
    assert!(help.contains("--color <WHEN>"), "{help}");
    assert!(help.contains("EXAMPLES:"), "{help}");
}
