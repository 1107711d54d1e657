//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("codefreeze")
        .about("Freeze source files into C static initializers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(freeze_command())
        .subcommand(dump_command())
}

/// Compile a source file and emit the frozen artifact.
pub fn freeze_command() -> Command {
    Command::new("freeze")
        .about("Compile a source file and emit C static initializers")
        .after_help(
            r#"EXAMPLES:
  codefreeze freeze hello.py                  # artifact on stdout
  codefreeze freeze hello.py -o frozen.c      # artifact written to frozen.c"#,
        )
        .arg(source_path_arg())
        .arg(output_path_arg())
        .arg(color_arg())
}

/// Show the compiled unit without freezing it.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled unit and disassembled bytecode")
        .arg(source_path_arg())
        .arg(color_arg())
}
