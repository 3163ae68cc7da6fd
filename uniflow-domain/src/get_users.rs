//! Read-side use case over the user repository.

use crate::streams;
use futures::Stream;
use std::sync::Arc;
use uniflow_model::User;
use uniflow_repository::Repository;

/// Read queries over the user collection.
///
/// Every stream-returning method replays the latest snapshot to a new
/// subscriber and then follows commits, because the views are composed over
/// [`Repository::observe_all`].
#[derive(Clone)]
pub struct GetUsersUseCase {
    repository: Arc<Repository<User>>,
}

impl GetUsersUseCase {
    #[must_use]
    pub fn new(repository: Arc<Repository<User>>) -> Self {
        Self { repository }
    }

    /// All active users.
    pub fn invoke(&self) -> impl Stream<Item = Vec<User>> + Send + 'static {
        streams::active_only(self.repository.observe_all())
    }

    /// Active users whose name matches `query` case-insensitively.
    pub fn search_by_name(
        &self,
        query: impl Into<String>,
    ) -> impl Stream<Item = Vec<User>> + Send + 'static {
        streams::search_by_name(self.repository.observe_all(), query)
    }

    /// Users with complete profiles, active or not.
    pub fn complete_profiles(&self) -> impl Stream<Item = Vec<User>> + Send + 'static {
        streams::complete_profiles(self.repository.observe_all())
    }

    /// One user by id from the current snapshot.
    #[must_use]
    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.repository.get_by_id(id)
    }

    /// One user by email, case-insensitively, from the current snapshot.
    #[must_use]
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let needle = email.to_lowercase();
        self.repository
            .find_first(|u| u.email.to_lowercase() == needle)
    }

    /// Re-pulls the collection from the data source.
    pub async fn refresh(&self) {
        self.repository.refresh().await;
    }
}
