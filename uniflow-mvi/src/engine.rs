//! State and effect plumbing shared by all controllers.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tokio::task::{AbortHandle, JoinHandle};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

/// Effects buffered while no consumer is attached. Overflow drops the new
/// effect rather than blocking a reducer.
pub const EFFECT_BUFFER: usize = 16;

/// Holds a screen's state and effect channels plus the tasks feeding them.
///
/// State lives in a `watch` channel, so reducers passed to
/// [`Engine::set_state`] are applied one at a time and every observer
/// starts from the latest value. Effects go through a bounded `mpsc`
/// channel with a single takeable receiver, which is what makes them
/// at-most-once.
pub struct Engine<S, F> {
    state_tx: watch::Sender<S>,
    effect_tx: mpsc::Sender<F>,
    effect_rx: Mutex<Option<mpsc::Receiver<F>>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    disposed: AtomicBool,
}

impl<S, F> Engine<S, F>
where
    S: Clone + Send + Sync + 'static,
    F: Send + 'static,
{
    #[must_use]
    pub fn new(initial: S) -> Self {
        let (state_tx, _) = watch::channel(initial);
        let (effect_tx, effect_rx) = mpsc::channel(EFFECT_BUFFER);
        Self {
            state_tx,
            effect_tx,
            effect_rx: Mutex::new(Some(effect_rx)),
            tasks: Mutex::new(Vec::new()),
            disposed: AtomicBool::new(false),
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> S {
        self.state_tx.borrow().clone()
    }

    /// A stream that yields the current state immediately and every state
    /// committed afterwards.
    #[must_use]
    pub fn observe(&self) -> WatchStream<S> {
        WatchStream::new(self.state_tx.subscribe())
    }

    /// Applies `reducer` to the current state and commits the result.
    ///
    /// Concurrent callers serialize inside the watch channel, so each
    /// reducer sees the state its predecessor committed. A no-op once the
    /// engine is disposed.
    pub fn set_state(&self, reducer: impl FnOnce(&S) -> S) {
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        self.state_tx.send_modify(|state| {
            let next = reducer(state);
            *state = next;
        });
    }

    /// Emits a one-shot effect.
    ///
    /// Effects buffer up to [`EFFECT_BUFFER`] while the consumer is away;
    /// an overflowing or unconsumable effect is dropped, never replayed.
    pub fn set_effect(&self, builder: impl FnOnce() -> F) {
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        match self.effect_tx.try_send(builder()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!("effect buffer full, dropping effect"),
            Err(TrySendError::Closed(_)) => debug!("effect consumer gone, dropping effect"),
        }
    }

    /// Takes the single effect receiver. `None` after the first call.
    #[must_use]
    pub fn effects(&self) -> Option<mpsc::Receiver<F>> {
        match self.effect_rx.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    /// Runs `future` on the engine's behalf; it is aborted on
    /// [`Engine::dispose`]. The returned handle lets the caller abort it
    /// earlier, e.g. when a newer request supersedes it.
    pub fn spawn(&self, future: impl Future<Output = ()> + Send + 'static) -> AbortHandle {
        let handle = tokio::spawn(future);
        let abort = handle.abort_handle();
        match self.tasks.lock() {
            Ok(mut tasks) => tasks.push(handle),
            Err(poisoned) => poisoned.into_inner().push(handle),
        }
        // A dispose that already ran, or races this push, must still win:
        // its drain may have missed the handle, so abort directly.
        if self.disposed.load(Ordering::SeqCst) {
            abort.abort();
        }
        abort
    }

    /// Aborts all tracked tasks and stops further state and effect
    /// emissions. Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let tasks = match self.tasks.lock() {
            Ok(mut tasks) => std::mem::take(&mut *tasks),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        debug!(count = tasks.len(), "engine disposed");
        for task in tasks {
            task.abort();
        }
    }

    /// Whether [`Engine::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}
