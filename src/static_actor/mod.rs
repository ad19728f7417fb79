//! # Static Actor
//!
//! The simplest possible processing unit: it waits for configuration messages and logs
//! the boolean `value` each one carries.
//!
//! ## Structure
//!
//! - [`entity`] - [`Actor`](crate::framework::Actor) implementation for [`StaticActor`]
//! - [`error`] - [`StaticError`] returned by the handler
//! - [`create()`] - Factory function that asks a creation facility for a new instance
//!
//! ## Usage
//!
//! ```rust
//! use static_actor::model::Config;
//! use static_actor::runtime::{ActorOptions, ActorSystem};
//! use static_actor::static_actor::create;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = ActorSystem::new("demo");
//!     let actor = create(&system, &ActorOptions::default())?;
//!
//!     actor.tell(Config::new().with("value", true)).await?;
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! Callers that want creation failure to be fatal use `?` (as above) or unwrap at the
//! call site; the factory itself always returns a `Result`.

pub mod entity;
pub mod error;

pub use entity::{StaticActor, StaticMessage};
pub use error::*;

use crate::framework::{ActorRef, ActorRefFactory, Props, SpawnError};
use crate::runtime::ActorOptions;
use tracing::{debug, instrument};

/// Creates a new Static actor through `factory`.
///
/// Makes exactly one instantiation attempt. `options` is accepted for signature parity
/// with other actor factories and is not consulted. A facility error is returned as is.
#[instrument(skip_all)]
pub fn create<F: ActorRefFactory>(
    factory: &F,
    _options: &ActorOptions,
) -> Result<ActorRef, SpawnError> {
    let actor_ref = factory.actor_of(Props::new(StaticActor::new))?;
    debug!(actor = %actor_ref, "Static actor created");
    Ok(actor_ref)
}
