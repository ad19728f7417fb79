//! Error types for the actor system.

use thiserror::Error;

/// Errors reported by [`ActorSystem`](super::ActorSystem) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SystemError {
    /// An actor task panicked or was aborted before shutdown could join it.
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}
