//! # Mock Framework
//!
//! Utilities for testing actors and factories in isolation.
//!
//! - [`MockFactory`] is an [`ActorRefFactory`] that builds actors without scheduling them,
//!   counts instantiation attempts and can be primed to fail.
//! - [`RecordingLogging`] is a [`Logging`] facility that keeps every rendered record in
//!   memory so tests can assert on exact log text.

use crate::framework::{
    Actor, ActorContext, ActorRef, ActorRefFactory, AnyMessage, LogSink, Logging, Props,
    SpawnError,
};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// RECORDING LOGGING
// =============================================================================

/// One captured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Name of the sink that wrote the record (the actor path).
    pub logger: String,
    /// The fully rendered message.
    pub message: String,
}

/// A [`Logging`] facility that records instead of printing.
///
/// Clones share the same record buffer, so keep one clone in the test and hand another
/// to the system or context under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogging {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record written so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Just the rendered messages, in write order.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl Logging for RecordingLogging {
    fn logger(&self, name: &str) -> Arc<dyn LogSink> {
        Arc::new(RecordingSink {
            name: name.to_string(),
            records: self.records.clone(),
        })
    }
}

struct RecordingSink {
    name: String,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogSink for RecordingSink {
    fn info(&self, args: fmt::Arguments<'_>) {
        let record = LogRecord {
            logger: self.name.clone(),
            message: args.to_string(),
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

// =============================================================================
// MOCK FACTORY
// =============================================================================

/// A creation facility that instantiates actors but never runs them.
///
/// Every successful call hands back a live [`ActorRef`] whose mailbox is parked inside the
/// factory, so tells succeed (until the mailbox fills) and nothing is handled.
///
/// # Example
/// ```ignore
/// let factory = MockFactory::new();
/// factory.fail_next(SpawnError::NameTaken("static".into()));
///
/// assert!(create(&factory, &ActorOptions::default()).is_err());
/// assert_eq!(factory.instantiations(), 1);
/// ```
pub struct MockFactory {
    logging: Arc<dyn Logging>,
    calls: AtomicUsize,
    next_uid: AtomicU64,
    failures: Mutex<VecDeque<SpawnError>>,
    mailboxes: Mutex<Vec<mpsc::Receiver<AnyMessage>>>,
}

impl MockFactory {
    /// Creates a factory whose actors log into a fresh [`RecordingLogging`].
    pub fn new() -> Self {
        Self::with_logging(Arc::new(RecordingLogging::new()))
    }

    pub fn with_logging(logging: Arc<dyn Logging>) -> Self {
        Self {
            logging,
            calls: AtomicUsize::new(0),
            next_uid: AtomicU64::new(1),
            failures: Mutex::new(VecDeque::new()),
            mailboxes: Mutex::new(Vec::new()),
        }
    }

    /// Make the next `actor_of` call fail with `error`. Calls queue up in order.
    pub fn fail_next(&self, error: SpawnError) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(error);
    }

    /// Number of `actor_of` calls made so far, successful or not.
    pub fn instantiations(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRefFactory for MockFactory {
    fn actor_of<A: Actor>(&self, props: Props<A>) -> Result<ActorRef, SpawnError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failure = self
            .failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        let uid = self.next_uid.fetch_add(1, Ordering::SeqCst);
        let path = match props.name() {
            Some(name) => format!("/mock/{}", name),
            None => format!("/mock/${}", uid),
        };
        let (sender, receiver) = mpsc::channel(props.mailbox_capacity());
        let ctx = ActorContext::new(path.clone(), self.logging.clone());
        let _actor = props.produce(&ctx);

        self.mailboxes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receiver);
        Ok(ActorRef::new(path, uid, sender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_actor::StaticActor;

    #[test]
    fn test_recording_logging_shares_buffer_between_clones() {
        let logging = RecordingLogging::new();
        let sink = logging.clone().logger("/user/a");
        sink.info(format_args!("value {}", true));

        assert_eq!(
            logging.records(),
            vec![LogRecord {
                logger: "/user/a".into(),
                message: "value true".into(),
            }]
        );
    }

    #[test]
    fn test_fail_next_is_consumed_in_order() {
        let factory = MockFactory::new();
        factory.fail_next(SpawnError::SystemTerminated);
        factory.fail_next(SpawnError::NoRuntime);

        let first = factory.actor_of(Props::new(StaticActor::new));
        let second = factory.actor_of(Props::new(StaticActor::new));
        let third = factory.actor_of(Props::new(StaticActor::new));

        assert_eq!(first.unwrap_err(), SpawnError::SystemTerminated);
        assert_eq!(second.unwrap_err(), SpawnError::NoRuntime);
        assert_eq!(third.unwrap().path(), "/mock/$1");
        assert_eq!(factory.instantiations(), 3);
    }
}
