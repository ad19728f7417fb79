//! Error types for the Static actor.

use crate::model::ConfigError;
use thiserror::Error;

/// Errors returned by the Static actor's message handler.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaticError {
    /// The configuration message did not carry a usable `value`.
    #[error("Malformed configuration: {0}")]
    Config(#[from] ConfigError),
}
