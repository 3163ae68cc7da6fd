//! Reactive repository layer for Uniflow.
//!
//! The repository is the sole owner of an entity collection. Mutations go
//! through its CRUD operations, which write through an injected
//! [`DataSource`] collaborator and then commit to the canonical in-memory
//! snapshot. Every commit is re-broadcast to observers:
//!
//! - [`Repository::observe_all`] replays the latest snapshot to each new
//!   subscriber, then emits on every commit, and only terminates when the
//!   repository is dropped.
//! - [`Repository::observe_filtered`] is a derived view, re-evaluated on
//!   every commit.
//!
//! Expected failures (`NotFound`, `AlreadyExists`) are typed values, and a
//! faulting data source never kills a stream — `refresh` converts the fault
//! into an empty emission.

mod dto;
mod keyed;
mod repository;
mod source;

pub use dto::UserDto;
pub use keyed::Keyed;
pub use repository::Repository;
pub use source::{DataSource, DataSourceError, InMemoryDataSource};
