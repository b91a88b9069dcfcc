//! Error types for the command-line driver.

use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// Reading an input file failed.
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The error message.
        message: String,
    },
    /// An input file was not valid JSON of the expected shape.
    Json {
        /// The file that failed.
        path: PathBuf,
        /// The error message.
        message: String,
    },
    /// The core rejected an input.
    Core(skytrack_core::Error),
}

impl Error {
    pub fn io(path: &Path, e: &std::io::Error) -> Self {
        Error::Io {
            path: path.to_owned(),
            message: e.to_string(),
        }
    }

    pub fn json(path: &Path, e: &serde_json::Error) -> Self {
        Error::Json {
            path: path.to_owned(),
            message: e.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
            Error::Json { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            Error::Core(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<skytrack_core::Error> for Error {
    fn from(e: skytrack_core::Error) -> Self {
        Error::Core(e)
    }
}
