//! Core type definitions for Uniflow.
//!
//! This crate defines the fundamental, screen-agnostic types used throughout
//! the application core:
//! - Entity id generation (UUID v7)
//! - Wall-clock helpers (epoch milliseconds, `0` = unset)
//! - The shared error taxonomy consumed by every other crate
//!
//! All domain-specific types (the user model, screen contracts, etc.) belong
//! in their respective crates, not here.

mod error;
mod ids;
mod time;

pub use error::{CoreError, CoreResult};
pub use ids::new_entity_id;
pub use time::{UNSET_MS, now_ms};
