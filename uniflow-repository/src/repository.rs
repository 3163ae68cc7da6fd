//! The generic reactive repository.

use crate::{DataSource, Keyed};
use futures::Stream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};
use uniflow_types::{CoreError, CoreResult, new_entity_id, now_ms};

/// Owns an entity collection and broadcasts every committed snapshot.
///
/// Mutations write through the injected [`DataSource`] first and commit to
/// the in-memory snapshot only on success, so observers never see a write
/// the backing store rejected. A single gate mutex serializes the whole
/// check-source-commit sequence; observers therefore receive snapshots in
/// commit order.
pub struct Repository<T> {
    source: Arc<dyn DataSource<T>>,
    tx: watch::Sender<Vec<T>>,
    write_gate: Mutex<()>,
}

impl<T> Repository<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    /// Creates an empty repository over `source`. Call [`Self::refresh`] to
    /// pull the initial collection.
    #[must_use]
    pub fn new(source: Arc<dyn DataSource<T>>) -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            source,
            tx,
            write_gate: Mutex::new(()),
        }
    }

    /// A continuously updated view of the whole collection. The latest
    /// snapshot is replayed to each new subscriber; the stream ends only
    /// when the repository is dropped.
    #[must_use]
    pub fn observe_all(&self) -> WatchStream<Vec<T>> {
        WatchStream::new(self.tx.subscribe())
    }

    /// A derived view containing only entities matching `predicate`,
    /// re-evaluated on every commit.
    pub fn observe_filtered<F>(&self, predicate: F) -> impl Stream<Item = Vec<T>> + Send + 'static
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        self.observe_all()
            .map(move |items| items.into_iter().filter(|t| predicate(t)).collect())
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.tx.borrow().clone()
    }

    /// Looks up one entity by id in the current snapshot.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.tx.borrow().iter().find(|t| t.id() == id).cloned()
    }

    /// First entity matching `predicate`, in snapshot order.
    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.tx.borrow().iter().find(|t| predicate(t)).cloned()
    }

    /// Number of entities in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Whether the current snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Replaces the snapshot with the data source's current collection.
    ///
    /// A faulting source becomes an empty emission — the observable streams
    /// stay alive across transient faults.
    pub async fn refresh(&self) {
        let _gate = self.write_gate.lock().await;
        match self.source.fetch_all().await {
            Ok(items) => {
                debug!(count = items.len(), "repository refreshed");
                self.tx.send_replace(items);
            }
            Err(err) => {
                warn!(%err, "refresh fault, emitting empty snapshot");
                self.tx.send_replace(Vec::new());
            }
        }
    }

    /// Adds a new entity. Assigns a fresh id when the incoming one is
    /// blank, stamps timestamps, and fails with `AlreadyExists` when the id
    /// is taken.
    pub async fn add(&self, entity: T) -> CoreResult<T> {
        let _gate = self.write_gate.lock().await;

        let mut entity = entity;
        if entity.id().trim().is_empty() {
            entity.set_id(new_entity_id());
        }
        if self.tx.borrow().iter().any(|t| t.id() == entity.id()) {
            return Err(CoreError::AlreadyExists(entity.id().to_string()));
        }

        let now = now_ms();
        entity.mark_created(now);
        entity.mark_updated(now);

        let stored = self
            .source
            .create(entity)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        debug!(id = stored.id(), "entity added");
        self.tx.send_modify(|items| items.push(stored.clone()));
        Ok(stored)
    }

    /// Updates an existing entity, failing with `NotFound` when the id is
    /// absent. The collection size never changes on failure.
    pub async fn update(&self, entity: T) -> CoreResult<T> {
        let _gate = self.write_gate.lock().await;

        let position = self
            .tx
            .borrow()
            .iter()
            .position(|t| t.id() == entity.id());
        let Some(position) = position else {
            return Err(CoreError::NotFound(entity.id().to_string()));
        };

        let mut entity = entity;
        entity.mark_updated(now_ms());

        let stored = self
            .source
            .update(entity)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        debug!(id = stored.id(), "entity updated");
        self.tx.send_modify(|items| items[position] = stored.clone());
        Ok(stored)
    }

    /// Deletes by id, failing with `NotFound` when absent.
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        let _gate = self.write_gate.lock().await;

        if !self.tx.borrow().iter().any(|t| t.id() == id) {
            return Err(CoreError::NotFound(id.to_string()));
        }

        self.source
            .delete(id)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        debug!(id, "entity deleted");
        self.tx.send_modify(|items| items.retain(|t| t.id() != id));
        Ok(())
    }
}
