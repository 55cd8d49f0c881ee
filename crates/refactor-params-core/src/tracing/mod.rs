//! Observability for refactor-params.
//! `tracing` crate with `EnvFilter`, configured via `REFACTOR_PARAMS_LOG`.

pub mod setup;

pub use setup::init_tracing;
