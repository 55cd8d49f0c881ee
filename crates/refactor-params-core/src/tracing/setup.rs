//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "REFACTOR_PARAMS_LOG";

/// Initialize logging.
///
/// Reads `REFACTOR_PARAMS_LOG` for filter directives, e.g.
/// `REFACTOR_PARAMS_LOG=refactor_params=debug`. Falls back to
/// `refactor_params=warn` when unset or invalid. Log lines go to stderr so
/// the report on stdout stays clean.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("refactor_params=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
