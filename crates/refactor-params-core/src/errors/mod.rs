//! Error handling for refactor-params.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod refactor_error;
pub mod rule_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use refactor_error::RefactorError;
pub use rule_error::RuleError;
