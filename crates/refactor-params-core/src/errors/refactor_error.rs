//! Run-level errors. Aggregates subsystem errors via `From` conversions.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};
use super::{ConfigError, RuleError};

/// Errors that abort a refactoring run.
///
/// A missing target file is not an error; it is reported as an outcome
/// and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RefactorError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Failed to render report: {0}")]
    Report(String),
}

impl RefactorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl ErrorCode for RefactorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Config(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Report(_) => error_code::REPORT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_delegate_to_inner_error() {
        let err: RefactorError = RuleError::PatternCompilation {
            rule: "r".into(),
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.error_code(), error_code::PATTERN_ERROR);

        let err = RefactorError::io(
            "src/ffi.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.error_code(), error_code::IO_ERROR);
        assert!(err.display_string().starts_with("[IO_ERROR] IO error on src/ffi.rs"));
    }
}
