//! Minimal actor framework.
//!
//! This module provides the building blocks a host needs to instantiate addressable
//! actors and deliver messages to them.
//!
//! # Main Components
//!
//! - [`Actor`] - Trait that processing units implement
//! - [`Props`] / [`ActorRefFactory`] - Construction descriptor and the facility that consumes it
//! - [`ActorRef`] - Handle used to address a running actor
//! - [`Logging`] / [`LogSink`] - Per-actor logging injected at construction
//! - [`SpawnError`] / [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a mock creation facility and a recording log sink.

pub mod core;
pub mod error;
pub mod logging;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use error::{FrameworkError, SpawnError};
pub use logging::{LogSink, Logging, TracingLogging};
