//! The data-source collaborator contract.
//!
//! A data source is the repository's backing store — an HTTP API, platform
//! storage, or an in-memory seed. Each call is independently faultable; the
//! repository converts faults into typed failures (or, on `refresh`, into an
//! empty emission) so observers never see a stream terminate.

use crate::Keyed;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// A fault raised by a data source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataSourceError {
    /// The backing store could not be reached.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected or failed the call.
    #[error("data source fault: {0}")]
    Fault(String),
}

/// Asynchronous CRUD collaborator injected into a [`crate::Repository`].
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    /// Fetches the full collection.
    async fn fetch_all(&self) -> Result<Vec<T>, DataSourceError>;

    /// Fetches one entity, `None` when absent.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<T>, DataSourceError>;

    /// Persists a new entity, returning the stored representation.
    async fn create(&self, entity: T) -> Result<T, DataSourceError>;

    /// Persists changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, DataSourceError>;

    /// Removes an entity.
    async fn delete(&self, id: &str) -> Result<(), DataSourceError>;
}

/// In-memory data source used by tests, demos and the wasm target, where no
/// network backend exists. Seedable and fault-injectable.
pub struct InMemoryDataSource<T> {
    items: RwLock<Vec<T>>,
    fail_next: AtomicBool,
}

impl<T> Default for InMemoryDataSource<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            fail_next: AtomicBool::new(false),
        }
    }
}

impl<T: Keyed + Clone + Send + Sync> InMemoryDataSource<T> {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with `items`.
    #[must_use]
    pub fn seeded(items: Vec<T>) -> Arc<Self> {
        Arc::new(Self {
            items: RwLock::new(items),
            fail_next: AtomicBool::new(false),
        })
    }

    /// Makes the next call fail with [`DataSourceError::Unavailable`].
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_fault(&self) -> Result<(), DataSourceError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(DataSourceError::Unavailable("injected fault".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<T: Keyed + Clone + Send + Sync> DataSource<T> for InMemoryDataSource<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, DataSourceError> {
        self.check_fault()?;
        Ok(self.items.read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<T>, DataSourceError> {
        self.check_fault()?;
        Ok(self.items.read().await.iter().find(|t| t.id() == id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T, DataSourceError> {
        self.check_fault()?;
        let mut items = self.items.write().await;
        if items.iter().any(|t| t.id() == entity.id()) {
            return Err(DataSourceError::Fault(format!(
                "id already present: {}",
                entity.id()
            )));
        }
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, DataSourceError> {
        self.check_fault()?;
        let mut items = self.items.write().await;
        match items.iter_mut().find(|t| t.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(DataSourceError::Fault(format!(
                "no such id: {}",
                entity.id()
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), DataSourceError> {
        self.check_fault()?;
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|t| t.id() != id);
        if items.len() == before {
            return Err(DataSourceError::Fault(format!("no such id: {id}")));
        }
        Ok(())
    }
}
