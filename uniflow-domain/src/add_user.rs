//! Write-side use case: validated user creation.

use std::sync::Arc;
use tracing::debug;
use uniflow_model::User;
use uniflow_repository::Repository;
use uniflow_types::{CoreError, CoreResult};

/// Validates and stores a new user.
///
/// Validation happens here rather than in the repository so the repository
/// stays entity-agnostic. Besides id uniqueness (enforced by the
/// repository), the email must not already be taken, compared
/// case-insensitively.
#[derive(Clone)]
pub struct AddUserUseCase {
    repository: Arc<Repository<User>>,
}

impl AddUserUseCase {
    #[must_use]
    pub fn new(repository: Arc<Repository<User>>) -> Self {
        Self { repository }
    }

    pub async fn invoke(&self, user: User) -> CoreResult<User> {
        if user.name.trim().is_empty() {
            return Err(CoreError::Validation("user name cannot be empty".into()));
        }
        if !user.is_valid_email() {
            return Err(CoreError::Validation("invalid email format".into()));
        }

        let email = user.email.to_lowercase();
        if let Some(existing) = self
            .repository
            .find_first(|u| u.email.to_lowercase() == email)
        {
            return Err(CoreError::AlreadyExists(existing.email));
        }

        let stored = self.repository.add(user).await?;
        debug!(id = %stored.id, "user added");
        Ok(stored)
    }
}
