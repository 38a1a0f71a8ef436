use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::objects::line::Sequence;
use crate::domain::objects::normalize::NormalizeOptions;

/// CLI operand designating standard input.
pub const STDIN_OPERAND: &str = "-";

/// Load failures are fatal to the comparison and map to exit code 2; the
/// message always names the failing source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: No such file or directory", path.display())]
    NotFound { path: PathBuf },
    #[error("{}: Permission denied", path.display())]
    AccessDenied { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One side of a comparison: a file on disk or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    pub fn from_operand(operand: &str) -> Self {
        if operand == STDIN_OPERAND {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(operand))
        }
    }

    /// Name used in notices and diagnostics (`-` for standard input).
    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => STDIN_OPERAND.to_owned(),
            Source::Path(path) => path.display().to_string(),
        }
    }

    /// Read the source to completion and build its line sequence. The whole
    /// input is materialized up front: the synchronizer needs bounded
    /// lookahead in both directions and cannot work on a stream.
    pub fn load(&self, options: NormalizeOptions) -> Result<Sequence, LoadError> {
        let text = self.read_to_string()?;
        Ok(Sequence::from_text(&text, options))
    }

    fn read_to_string(&self) -> Result<String, LoadError> {
        match self {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| LoadError::Io {
                        path: PathBuf::from(STDIN_OPERAND),
                        source,
                    })?;
                Ok(text)
            }
            Source::Path(path) => {
                std::fs::read_to_string(path).map_err(|error| Self::classify(path, error))
            }
        }
    }

    fn classify(path: &Path, error: std::io::Error) -> LoadError {
        let path = path.to_path_buf();
        match error.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => LoadError::AccessDenied { path },
            _ => LoadError::Io {
                path,
                source: error,
            },
        }
    }
}
