//! Entity id generation.
//!
//! Uses UUID v7 for time-ordered, globally unique identifiers. Ids travel
//! as strings so collaborators (wire DTOs, key-value stores, navigation
//! arguments) never need the uuid crate themselves.

use uuid::Uuid;

/// Generates a fresh entity id with the current timestamp embedded.
///
/// The repository calls this when an entity arrives with a blank id.
#[must_use]
pub fn new_entity_id() -> String {
    Uuid::now_v7().to_string()
}
