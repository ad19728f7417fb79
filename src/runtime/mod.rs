//! Runtime hosting and lifecycle management.
//!
//! - [`ActorSystem`] - The creation facility that spawns actors onto Tokio and shuts them down
//! - [`ActorOptions`] - Creation options handed to actor factories
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod error;
pub mod options;
pub mod system;
pub mod tracing;

pub use error::SystemError;
pub use options::ActorOptions;
pub use system::ActorSystem;
pub use self::tracing::setup_tracing;
