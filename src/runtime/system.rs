use crate::framework::{
    Actor, ActorCell, ActorContext, ActorRef, ActorRefFactory, Logging, Props, SpawnError,
    TracingLogging,
};
use crate::runtime::SystemError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The host runtime: spawns actors onto Tokio and owns their lifecycle.
///
/// `ActorSystem` is responsible for:
/// - **Instantiation**: Implements [`ActorRefFactory`], turning [`Props`] into running actors
/// - **Naming**: Keeps a registry of live actor names and rejects collisions
/// - **Shutdown**: Signals every actor to stop and joins their tasks
///
/// Cloning is cheap; clones share the same registry and actors.
///
/// # Example
///
/// ```ignore
/// let system = ActorSystem::new("demo");
/// let actor = create(&system, &ActorOptions::default())?;
/// actor.tell(Config::new().with("value", true)).await?;
/// system.shutdown().await?;
/// ```
#[derive(Clone)]
pub struct ActorSystem {
    inner: Arc<SystemInner>,
}

struct SystemInner {
    name: String,
    logging: Arc<dyn Logging>,
    next_uid: AtomicU64,
    registry: Mutex<HashSet<String>>,
    /// Tasks of actors that have not finished yet, keyed by uid. `terminated` is only set
    /// while this lock is held, so a spawn either lands here before shutdown takes the map
    /// or is refused.
    tasks: Mutex<HashMap<u64, JoinHandle<()>>>,
    stop: watch::Sender<bool>,
    terminated: AtomicBool,
}

impl SystemInner {
    fn release(&self, name: &str) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    fn forget(&self, uid: u64) {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&uid);
    }
}

impl ActorSystem {
    /// Creates a system whose actors log through `tracing`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_logging(name, Arc::new(TracingLogging))
    }

    /// Creates a system whose actors obtain their log sinks from `logging`.
    pub fn with_logging(name: impl Into<String>, logging: Arc<dyn Logging>) -> Self {
        let (stop, _) = watch::channel(false);
        Self {
            inner: Arc::new(SystemInner {
                name: name.into(),
                logging,
                next_uid: AtomicU64::new(1),
                registry: Mutex::new(HashSet::new()),
                tasks: Mutex::new(HashMap::new()),
                stop,
                terminated: AtomicBool::new(false),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Number of actors currently registered.
    pub fn live_actors(&self) -> usize {
        self.inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of actor tasks still running. Tasks drop out as soon as their actor stops.
    pub fn running_tasks(&self) -> usize {
        self.inner
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_terminated(&self) -> bool {
        self.inner.terminated.load(Ordering::SeqCst)
    }

    /// Gracefully shuts down every actor.
    ///
    /// 1. Refuses further spawns
    /// 2. Signals every actor to stop; each closes its mailbox and handles what is queued
    /// 3. Waits for all actor tasks to complete
    ///
    /// Returns the first task failure, after every task has been joined.
    pub async fn shutdown(&self) -> Result<(), SystemError> {
        info!(system = %self.inner.name, "Shutting down system...");
        let handles = {
            let mut tasks = self
                .inner
                .tasks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.inner.terminated.store(true, Ordering::SeqCst);
            std::mem::take(&mut *tasks)
        };
        self.inner.stop.send_replace(true);

        let mut result = Ok(());
        for handle in handles.into_values() {
            if let Err(e) = handle.await {
                error!(system = %self.inner.name, error = %e, "Actor task failed");
                if result.is_ok() {
                    result = Err(SystemError::ActorPanicked(e.to_string()));
                }
            }
        }

        info!(system = %self.inner.name, "System shutdown complete.");
        result
    }
}

impl ActorRefFactory for ActorSystem {
    fn actor_of<A: Actor>(&self, props: Props<A>) -> Result<ActorRef, SpawnError> {
        let inner = &self.inner;
        if inner.terminated.load(Ordering::SeqCst) {
            return Err(SpawnError::SystemTerminated);
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SpawnError::NoRuntime)?;

        let uid = inner.next_uid.fetch_add(1, Ordering::SeqCst);
        let name = match props.name() {
            Some(name) => {
                validate_name(name)?;
                name.to_string()
            }
            None => format!("${}", uid),
        };
        let path = format!("/user/{}", name);
        let ctx = ActorContext::new(path.clone(), inner.logging.clone());
        let (sender, receiver) = mpsc::channel(props.mailbox_capacity());

        // The constructor runs before the name is reserved; a panic here leaves nothing behind.
        let actor = props.produce(&ctx);
        let cell = ActorCell::new(actor, ctx, receiver);

        if !inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone())
        {
            return Err(SpawnError::NameTaken(name));
        }

        let mut tasks = inner.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.terminated.load(Ordering::SeqCst) {
            drop(tasks);
            inner.release(&name);
            return Err(SpawnError::SystemTerminated);
        }

        let stop = inner.stop.subscribe();
        let system = Arc::downgrade(inner);
        // The task cannot remove its entry before it is inserted: `forget` waits on this lock.
        let handle = runtime.spawn(async move {
            cell.run(stop).await;
            if let Some(inner) = system.upgrade() {
                inner.release(&name);
                inner.forget(uid);
            }
        });
        tasks.insert(uid, handle);
        drop(tasks);

        info!(system = %inner.name, actor = %path, "Spawned");
        Ok(ActorRef::new(path, uid, sender))
    }
}

/// User supplied names must be non-empty path segments and may not use the `$` prefix
/// reserved for generated names.
fn validate_name(name: &str) -> Result<(), SpawnError> {
    if name.is_empty() || name.contains('/') || name.starts_with('$') {
        return Err(SpawnError::InvalidName(name.to_string()));
    }
    Ok(())
}
