//! # Actor Logging
//!
//! Actors do not reach for a global logger. Instead the host hands every actor an
//! [`ActorContext`](crate::framework::ActorContext) at construction time, and the actor
//! asks it for a [`LogSink`] bound to its own path.
//!
//! The default [`TracingLogging`] forwards records to `tracing`, so they show up in the
//! subscriber installed by [`setup_tracing`](crate::runtime::setup_tracing). Tests swap in
//! [`RecordingLogging`](crate::framework::mock::RecordingLogging) to assert on the exact
//! rendered text.

use std::fmt;
use std::sync::Arc;

/// A named log sink bound to one actor.
pub trait LogSink: Send + Sync {
    /// Write an informational record.
    fn info(&self, args: fmt::Arguments<'_>);
}

/// Facility that hands out log sinks by name.
pub trait Logging: Send + Sync + 'static {
    fn logger(&self, name: &str) -> Arc<dyn LogSink>;
}

/// [`Logging`] backed by the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogging;

impl Logging for TracingLogging {
    fn logger(&self, name: &str) -> Arc<dyn LogSink> {
        Arc::new(TracingSink {
            name: name.to_string(),
        })
    }
}

/// Sink that emits each record as a `tracing` event with the actor path as a field.
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
}

impl LogSink for TracingSink {
    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(actor = %self.name, "{}", args);
    }
}
