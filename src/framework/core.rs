//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`Actor`]: The trait every processing unit implements.
//! - [`Inbound`]: Converts an untyped payload into an actor's closed message enum.
//! - [`Props`]: The construction descriptor handed to a creation facility.
//! - [`ActorRefFactory`]: The creation facility itself.
//! - [`ActorRef`]: The handle used to address a running actor.
//! - [`ActorCell`]: The mailbox loop that drives one actor.

use crate::framework::error::{FrameworkError, SpawnError};
use crate::framework::logging::{LogSink, Logging};
use async_trait::async_trait;
use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Default capacity of an actor's mailbox.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// An untyped payload as it travels through a mailbox.
pub type AnyMessage = Box<dyn Any + Send>;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Conversion from an untyped payload into an actor's message type.
///
/// Actors define a closed enum of the messages they understand and implement this trait
/// to map the payload types they accept onto it. Anything else is handed back unchanged
/// and the mailbox loop treats it as unhandled.
pub trait Inbound: Sized + Send + Debug + 'static {
    fn from_any(msg: AnyMessage) -> Result<Self, AnyMessage>;
}

/// Trait that any processing unit must implement to be driven by an [`ActorCell`].
///
/// # Concurrency
/// The cell owns the actor and calls [`Actor::receive`] for one message at a time, each
/// to completion. Handlers therefore get `&mut self` without any locking.
///
/// # Failure
/// An `Err` returned from [`Actor::receive`] is fatal for the actor: the cell logs it,
/// runs [`Actor::post_stop`] and exits. There is no restart.
#[async_trait]
pub trait Actor: Send + 'static {
    /// The closed set of messages this actor understands.
    type Message: Inbound;

    /// The error type returned by the handler.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first message is delivered.
    async fn pre_start(&mut self, _ctx: &ActorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one message.
    async fn receive(&mut self, msg: Self::Message, ctx: &ActorContext) -> Result<(), Self::Error>;

    /// Called once after the mailbox loop exits, whatever the reason.
    async fn post_stop(&mut self, _ctx: &ActorContext) {}
}

// =============================================================================
// 2. CONSTRUCTION
// =============================================================================

/// Runtime context handed to an actor at construction and to every hook.
#[derive(Clone)]
pub struct ActorContext {
    path: String,
    logging: Arc<dyn Logging>,
}

impl ActorContext {
    pub fn new(path: impl Into<String>, logging: Arc<dyn Logging>) -> Self {
        Self {
            path: path.into(),
            logging,
        }
    }

    /// The address of the actor this context belongs to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtain a log sink bound to this actor.
    pub fn log(&self) -> Arc<dyn LogSink> {
        self.logging.logger(&self.path)
    }
}

impl Debug for ActorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorContext")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Construction descriptor for an actor.
///
/// Holds the constructor plus the few knobs the creation facility needs. The constructor
/// receives the [`ActorContext`] of the actor being created and nothing else.
pub struct Props<A: Actor> {
    constructor: Box<dyn FnOnce(&ActorContext) -> A + Send>,
    name: Option<String>,
    mailbox_capacity: usize,
}

impl<A: Actor> Props<A> {
    pub fn new(constructor: impl FnOnce(&ActorContext) -> A + Send + 'static) -> Self {
        Self {
            constructor: Box::new(constructor),
            name: None,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Zero is bumped to one; Tokio channels need room for at least one message.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn mailbox_capacity(&self) -> usize {
        self.mailbox_capacity
    }

    /// Run the constructor.
    pub fn produce(self, ctx: &ActorContext) -> A {
        (self.constructor)(ctx)
    }
}

impl<A: Actor> Debug for Props<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("actor", &std::any::type_name::<A>())
            .field("name", &self.name)
            .field("mailbox_capacity", &self.mailbox_capacity)
            .finish()
    }
}

/// A capability able to instantiate addressable actors.
pub trait ActorRefFactory {
    fn actor_of<A: Actor>(&self, props: Props<A>) -> Result<ActorRef, SpawnError>;
}

// =============================================================================
// 3. THE HANDLE
// =============================================================================

/// Opaque, cloneable address of a running actor.
///
/// Two handles compare equal only when they point at the same incarnation: the same
/// path *and* the same unique id.
#[derive(Clone)]
pub struct ActorRef {
    path: Arc<str>,
    uid: u64,
    sender: mpsc::Sender<AnyMessage>,
}

impl ActorRef {
    pub fn new(path: impl Into<Arc<str>>, uid: u64, sender: mpsc::Sender<AnyMessage>) -> Self {
        Self {
            path: path.into(),
            uid,
            sender,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// Fire-and-forget delivery. Waits only for mailbox capacity, never for handling.
    pub async fn tell<M: Any + Send>(&self, msg: M) -> Result<(), FrameworkError> {
        self.sender
            .send(Box::new(msg))
            .await
            .map_err(|_| FrameworkError::ActorClosed(self.path.to_string()))
    }

    /// True once the actor no longer accepts messages.
    pub fn is_terminated(&self) -> bool {
        self.sender.is_closed()
    }

    /// Resolves once the actor no longer accepts messages. Messages queued before that
    /// point may still be in flight.
    pub async fn terminated(&self) {
        self.sender.closed().await
    }
}

impl PartialEq for ActorRef {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid && self.path == other.path
    }
}

impl Eq for ActorRef {}

impl Hash for ActorRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.uid.hash(state);
    }
}

impl Debug for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorRef")
            .field("path", &self.path)
            .field("uid", &self.uid)
            .finish()
    }
}

impl Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.path, self.uid)
    }
}

// =============================================================================
// 4. THE MAILBOX LOOP
// =============================================================================

/// Drives one actor: owns it, its context and the receiving end of its mailbox.
pub struct ActorCell<A: Actor> {
    actor: A,
    ctx: ActorContext,
    receiver: mpsc::Receiver<AnyMessage>,
}

impl<A: Actor> ActorCell<A> {
    pub fn new(actor: A, ctx: ActorContext, receiver: mpsc::Receiver<AnyMessage>) -> Self {
        Self {
            actor,
            ctx,
            receiver,
        }
    }

    /// Runs the mailbox loop until the mailbox closes, `stop` flips to `true`, or the
    /// handler fails.
    ///
    /// A stop signal closes the mailbox; messages already queued are still handled.
    pub async fn run(mut self, mut stop: watch::Receiver<bool>) {
        let path = self.ctx.path().to_string();
        if let Err(e) = self.actor.pre_start(&self.ctx).await {
            error!(actor = %path, error = %e, "pre_start failed");
            self.actor.post_stop(&self.ctx).await;
            return;
        }
        info!(actor = %path, "Actor started");

        let mut draining = false;
        loop {
            if !draining && *stop.borrow() {
                self.receiver.close();
                draining = true;
            }
            let next = if draining {
                self.receiver.recv().await
            } else {
                tokio::select! {
                    msg = self.receiver.recv() => msg,
                    changed = stop.changed() => {
                        if changed.is_err() {
                            warn!(actor = %path, "System dropped without shutdown");
                        }
                        self.receiver.close();
                        draining = true;
                        continue;
                    }
                }
            };
            let Some(raw) = next else { break };

            match A::Message::from_any(raw) {
                Ok(msg) => {
                    debug!(actor = %path, ?msg, "Receive");
                    if let Err(e) = self.actor.receive(msg, &self.ctx).await {
                        error!(actor = %path, error = %e, "Handler failed, stopping actor");
                        break;
                    }
                }
                Err(_) => debug!(actor = %path, "Unhandled message"),
            }
        }

        self.actor.post_stop(&self.ctx).await;
        info!(actor = %path, "Shutdown");
    }
}
