use std::path::PathBuf;

use codefreeze_compiler::{compile, dump};
use codefreeze_lib::read_source;

use super::render_error;

pub struct DumpArgs {
    pub source_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(text) => print!("{text}"),
        Err(rendered) => {
            eprint!("{rendered}");
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &DumpArgs) -> Result<String, String> {
    let source = read_source(&args.source_path).map_err(|e| render_error(&e, "", args.color))?;
    let label = args.source_path.display().to_string();

    let unit = compile(&source, &label)
        .map_err(|e| render_error(&codefreeze_lib::Error::from(e), &source, args.color))?;

    Ok(dump(&unit, args.color))
}
