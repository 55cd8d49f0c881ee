//! Rewrite rule errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while defining, loading, or compiling rewrite rules.
///
/// Applying a compiled rule never fails; these only surface before any
/// file is touched.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule '{rule}': {message}")]
    InvalidDefinition { rule: String, message: String },

    #[error("Pattern for rule '{rule}' failed to compile: {message}")]
    PatternCompilation { rule: String, message: String },

    #[error("Rules parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Failed to read rules file {path}: {message}")]
    Io { path: String, message: String },
}

impl ErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternCompilation { .. } => error_code::PATTERN_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
            _ => error_code::RULE_ERROR,
        }
    }
}
