//! Codefreeze: compile a source file and freeze it into C static initializers.
//!
//! # Example
//!
//! ```
//! let artifact = codefreeze_lib::freeze_source("pass", "hello.py").unwrap();
//! assert!(artifact.starts_with("#include <Python.h>\n"));
//! assert!(artifact.contains("struct PyCodeObject toplevel = {"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io;
use std::path::{Path, PathBuf};

mod output;


pub use codefreeze_compiler::CompileError;
pub use codefreeze_core::CompiledUnit;
pub use codefreeze_emit::{EmitError, ROOT_SYMBOL};
pub use output::Output;

/// Errors that can occur while freezing a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {target}: {source}")]
    Write { target: String, source: io::Error },
}

impl Error {
    /// Renders the error for a terminal, with a source snippet for compile errors.
    pub fn render(&self, source: &str, colored: bool) -> String {
        match self {
            Error::Compile(err) => err.render(source, colored),
            other => format!("error: {other}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reads a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Compiles `source` and renders the complete artifact in memory.
///
/// `label` names the source in diagnostics and becomes the unit's filename.
pub fn freeze_source(source: &str, label: &str) -> Result<String> {
    let unit = codefreeze_compiler::compile(source, label)?;
    let artifact = codefreeze_emit::freeze_unit(&unit, ROOT_SYMBOL)?;
    tracing::info!(
        label,
        code_bytes = unit.code.len(),
        artifact_bytes = artifact.len(),
        "froze unit"
    );
    Ok(artifact)
}
