//! # Framework Errors
//!
//! Errors raised by the actor framework itself, as opposed to the errors an
//! individual actor returns from its handler.

/// Errors returned by a creation facility when it cannot instantiate an actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("Actor name already taken: {0}")]
    NameTaken(String),
    #[error("Invalid actor name: {0}")]
    InvalidName(String),
    #[error("Actor system terminated")]
    SystemTerminated,
    #[error("No Tokio runtime available to run the actor")]
    NoRuntime,
}

/// Errors that can occur when talking to a running actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed: {0}")]
    ActorClosed(String),
}
