//! Error types for gnuviz operations.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gnuviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error writing the script or data artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The renderer executable could not be launched (typically: not on PATH).
    #[error("failed to launch {program}: {source}")]
    Spawn {
        /// Program name that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The renderer ran but exited with a non-zero status.
    #[error("gnuplot exited with {status}")]
    Renderer {
        /// Exit status reported by the subprocess.
        status: ExitStatus,
    },

    /// The renderer's version banner could not be parsed.
    #[error("unable to parse gnuplot version string: {output:?}")]
    Version {
        /// Raw banner text that failed to parse.
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_spawn_error_display() {
        let err = Error::Spawn {
            program: "gnuplot".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("gnuplot"));
        assert!(err.to_string().contains("launch"));
    }

    #[test]
    fn test_version_error_display() {
        let err = Error::Version {
            output: "garbage".to_string(),
        };
        assert!(err.to_string().contains("garbage"));
    }
}
