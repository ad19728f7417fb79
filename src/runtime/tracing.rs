//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber filtered by
//! `RUST_LOG`. Actor log sinks from [`TracingLogging`](crate::framework::TracingLogging)
//! and the framework's own lifecycle events all flow through it.
//!
//! ```bash
//! # Actor output and lifecycle
//! RUST_LOG=info cargo run
//!
//! # Include every delivered message and unhandled payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run of the demo looks like:
//!
//! ```text
//! INFO Spawned system="demo" actor=/user/$1
//! INFO Actor started actor=/user/$1
//! INFO Static running with value true actor=/user/$1
//! INFO Shutting down system... system="demo"
//! INFO Shutdown actor=/user/$1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Actor paths are carried as a field instead
        .compact()
        .init();
}
