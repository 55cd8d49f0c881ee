//! ErrorCode trait for the command-line boundary.

/// Every error enum provides a stable, grep-friendly code so the binary can
/// print `[CODE] message` before exiting.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "IO_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
