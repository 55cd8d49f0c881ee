//! refactor-params-core: shared plumbing for the call-site migrator.
//!
//! - Config: TOML-based, layered resolution (CLI > env > project > defaults)
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Events: handler trait with no-op defaults, synchronous dispatch
//! - Tracing: `EnvFilter` driven by `REFACTOR_PARAMS_LOG`

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::{CliOverrides, RefactorConfig};
pub use errors::{ConfigError, ErrorCode, RefactorError, RuleError};
pub use events::{EventDispatcher, RefactorEventHandler};
