//! Identity and stamping hooks the repository needs from its entities.

use uniflow_model::User;

/// Implemented by entity types stored in a [`crate::Repository`].
///
/// The repository assigns an id when `id()` is blank and stamps the
/// timestamp fields at commit time; entities without timestamps can leave
/// the stamping hooks empty.
pub trait Keyed {
    /// The entity's identity. Blank means "not yet stored".
    fn id(&self) -> &str;

    /// Replaces the identity. Called once, on `add`, when the id is blank.
    fn set_id(&mut self, id: String);

    /// Stamps creation: called on `add` with the commit wall time.
    fn mark_created(&mut self, now_ms: i64);

    /// Stamps modification: called on `add` and `update`.
    fn mark_updated(&mut self, now_ms: i64);
}

impl Keyed for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn mark_created(&mut self, now_ms: i64) {
        if self.created_at == 0 {
            self.created_at = now_ms;
        }
    }

    fn mark_updated(&mut self, now_ms: i64) {
        self.updated_at = now_ms;
    }
}
