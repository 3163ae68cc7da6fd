//! The lifecycle machine.
//!
//! A single mutable state cell behind a tokio mutex. Every transition is
//! check-then-set under the lock, so two callers can never both observe a
//! valid transition and both commit conflicting states. Committed states are
//! published through a watch channel in commit order.

use crate::LifecycleState;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};
use uniflow_types::{CoreError, CoreResult};

/// Warm-up work run by [`AppLifecycle::initialize`]. Returning an error
/// message moves the machine to [`LifecycleState::Error`].
pub type WarmupFn = Arc<dyn Fn() -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Configuration for the lifecycle machine.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Duration of the default warm-up step in `initialize`.
    pub warmup: Duration,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_millis(100),
        }
    }
}

struct Inner {
    state: LifecycleState,
    initialized: bool,
    error_message: Option<String>,
}

/// The application lifecycle state machine.
pub struct AppLifecycle {
    inner: Mutex<Inner>,
    tx: watch::Sender<LifecycleState>,
    warmup: WarmupFn,
}

impl Default for AppLifecycle {
    fn default() -> Self {
        Self::new(LifecycleConfig::default())
    }
}

impl AppLifecycle {
    /// Creates a machine in `Created` whose warm-up is a bounded sleep.
    #[must_use]
    pub fn new(config: LifecycleConfig) -> Self {
        let warmup = config.warmup;
        Self::with_warmup(Arc::new(move || {
            Box::pin(async move {
                tokio::time::sleep(warmup).await;
                Ok(())
            })
        }))
    }

    /// Creates a machine with custom warm-up work (resource loading, cache
    /// priming). Used directly by tests to exercise the `Error` path.
    #[must_use]
    pub fn with_warmup(warmup: WarmupFn) -> Self {
        let (tx, _) = watch::channel(LifecycleState::Created);
        Self {
            inner: Mutex::new(Inner {
                state: LifecycleState::Created,
                initialized: false,
                error_message: None,
            }),
            tx,
            warmup,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        *self.tx.borrow()
    }

    /// A read-only observer of the current state. New subscribers see the
    /// latest committed state immediately.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<LifecycleState> {
        self.tx.subscribe()
    }

    /// Whether `initialize` has completed successfully at least once since
    /// the last `destroy`.
    pub async fn is_initialized(&self) -> bool {
        self.inner.lock().await.initialized
    }

    /// The message recorded by the most recent failure, if any.
    pub async fn error_message(&self) -> Option<String> {
        self.inner.lock().await.error_message.clone()
    }

    /// One-line debug summary of the machine.
    pub async fn state_info(&self) -> String {
        let inner = self.inner.lock().await;
        format!(
            "state: {}, initialized: {}, error: {:?}",
            inner.state, inner.initialized, inner.error_message
        )
    }

    /// Moves `Created`/`Error` to `Initializing`, runs the warm-up, then
    /// commits `Ready` — or `Error` with the message recorded when the
    /// warm-up fails.
    pub async fn initialize(&self) -> CoreResult<()> {
        {
            let mut inner = self.inner.lock().await;
            Self::guard(&inner, LifecycleState::Initializing)?;
            self.commit(&mut inner, LifecycleState::Initializing);
        }

        // Warm-up runs outside the lock so destroy() stays responsive.
        let outcome = (self.warmup)().await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Ok(()) => {
                // A destroy during warm-up wins; Ready is then unreachable.
                Self::guard(&inner, LifecycleState::Ready)?;
                inner.initialized = true;
                inner.error_message = None;
                self.commit(&mut inner, LifecycleState::Ready);
                Ok(())
            }
            Err(message) => {
                warn!(%message, "lifecycle warm-up failed");
                inner.error_message = Some(message.clone());
                if inner.state.can_transition_to(LifecycleState::Error) {
                    self.commit(&mut inner, LifecycleState::Error);
                }
                Err(CoreError::Internal(message))
            }
        }
    }

    /// Moves `Ready`/`Paused` to `Running`. Requires a completed
    /// `initialize`.
    pub async fn start(&self) -> CoreResult<()> {
        let mut inner = self.inner.lock().await;
        Self::guard(&inner, LifecycleState::Running)?;
        if !inner.initialized {
            return Err(CoreError::NotInitialized);
        }
        inner.error_message = None;
        self.commit(&mut inner, LifecycleState::Running);
        Ok(())
    }

    /// Moves `Running` to `Paused`.
    pub async fn pause(&self) -> CoreResult<()> {
        let mut inner = self.inner.lock().await;
        Self::guard(&inner, LifecycleState::Paused)?;
        self.commit(&mut inner, LifecycleState::Paused);
        Ok(())
    }

    /// Moves exactly `Paused` back to `Running` — same requirements as
    /// `start`.
    pub async fn resume(&self) -> CoreResult<()> {
        let mut inner = self.inner.lock().await;
        if inner.state != LifecycleState::Paused {
            return Err(CoreError::InvalidTransition {
                from: inner.state.to_string(),
                to: LifecycleState::Running.to_string(),
            });
        }
        if !inner.initialized {
            return Err(CoreError::NotInitialized);
        }
        inner.error_message = None;
        self.commit(&mut inner, LifecycleState::Running);
        Ok(())
    }

    /// Unconditionally tears the machine down. Always ends in `Destroyed`,
    /// from any state, and never fails outward.
    pub async fn destroy(&self) {
        let mut inner = self.inner.lock().await;
        if inner.state.is_destroyed() {
            return;
        }
        inner.initialized = false;
        inner.error_message = None;
        self.commit(&mut inner, LifecycleState::Destroyed);
    }

    fn guard(inner: &Inner, to: LifecycleState) -> CoreResult<()> {
        if inner.state.can_transition_to(to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: inner.state.to_string(),
                to: to.to_string(),
            })
        }
    }

    fn commit(&self, inner: &mut Inner, next: LifecycleState) {
        debug!(from = %inner.state, to = %next, "lifecycle transition");
        inner.state = next;
        self.tx.send_replace(next);
    }
}
