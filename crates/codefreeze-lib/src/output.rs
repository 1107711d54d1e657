use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Where a finished artifact goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }

    /// Writes the whole artifact.
    ///
    /// File output goes through a temporary file in the destination directory
    /// that replaces the target only once fully written, so a failed run never
    /// leaves a truncated artifact behind.
    pub fn write_artifact(&self, artifact: &str) -> Result<()> {
        let written = match self {
            Output::Stdout => write_stdout(artifact),
            Output::File(path) => write_file(path, artifact),
        };
        written.map_err(|source| Error::Write {
            target: self.to_string(),
            source,
        })?;
        tracing::debug!(output = %self, bytes = artifact.len(), "wrote artifact");
        Ok(())
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_stdout(artifact: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(artifact.as_bytes())?;
    out.flush()
}

fn write_file(path: &Path, artifact: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(artifact.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
