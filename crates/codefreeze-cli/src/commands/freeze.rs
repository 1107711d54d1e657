use std::path::PathBuf;

use codefreeze_lib::{Output, freeze_source, read_source};

use super::render_error;

pub struct FreezeArgs {
    pub source_path: PathBuf,
    pub output: Output,
    pub color: bool,
}

pub fn run(args: FreezeArgs) {
    if let Err(rendered) = execute(&args) {
        eprint!("{rendered}");
        std::process::exit(1);
    }
}

/// Compiles, freezes, and writes the artifact.
///
/// On failure returns the rendered error; the output has not been touched.
pub fn execute(args: &FreezeArgs) -> Result<(), String> {
    tracing::debug!(source = %args.source_path.display(), output = %args.output, "freezing");
    let source = read_source(&args.source_path).map_err(|e| render_error(&e, "", args.color))?;
    let label = args.source_path.display().to_string();

    let artifact =
        freeze_source(&source, &label).map_err(|e| render_error(&e, &source, args.color))?;

    args.output
        .write_artifact(&artifact)
        .map_err(|e| render_error(&e, &source, args.color))
}
