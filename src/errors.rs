//! Error types for file resolution, configuration and batch runs.
//!
//! Scoring itself never fails; everything here belongs to the I/O edges.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadabilityError>;

#[derive(Debug, Error)]
pub enum ReadabilityError {
    /// File system errors with the offending path
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text
    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// Configuration file errors
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Invalid glob pattern on the command line
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("no files matched the given patterns")]
    NoFilesMatched,
}

impl ReadabilityError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = ReadabilityError::io(
            "src/missing.rs",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read src/missing.rs: not found");
    }

    #[test]
    fn test_pattern_error_message() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = ReadabilityError::Pattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern '['"));
    }
}
