//! # Static Actor
//!
//! > **The smallest useful actor: created by a factory, configured by a message.**
//!
//! This crate shows how a processing unit is instantiated inside an actor runtime built
//! on Tokio, and how it reacts to a configuration message by logging one flag.
//!
//! ## Core Concepts
//!
//! ### Creation is a `Result`
//! [`static_actor::create`] asks a creation facility ([`ActorRefFactory`](framework::ActorRefFactory))
//! for a new actor and returns `Result<ActorRef, SpawnError>`. Callers that treat creation
//! failure as fatal use `?` or unwrap at the call site.
//!
//! ### Closed message sets
//! Each actor declares an enum of the messages it understands and matches on it
//! exhaustively. Payloads of any other type are dropped by the host with a debug log.
//!
//! ### Injected logging
//! Actors get their log sink from the [`ActorContext`](framework::ActorContext) they are
//! constructed with, never from global state. Tests inject a
//! [`RecordingLogging`](framework::mock::RecordingLogging) and assert on rendered text.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Actor trait, handles, construction descriptors and the mailbox loop.
//! - **Key items**: [`Actor`](framework::Actor), [`ActorRef`](framework::ActorRef), [`Props`](framework::Props).
//!
//! ### 2. The Host ([`runtime`])
//! - **Role**: Spawns actors onto Tokio, enforces unique names and shuts everything down.
//! - **Key items**: [`ActorSystem`](runtime::ActorSystem), [`setup_tracing`](runtime::setup_tracing).
//!
//! ### 3. The Data ([`model`])
//! - **Role**: The [`Config`](model::Config) document delivered to actors.
//!
//! ### 4. The Implementation ([`static_actor`])
//! - **Role**: The Static actor and its factory.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=info cargo run -- path/to/config.toml
//! ```

pub mod framework;
pub mod model;
pub mod runtime;
pub mod static_actor;
