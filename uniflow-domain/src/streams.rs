//! Pure combinators over user-collection streams.
//!
//! Each takes a `Stream<Item = Vec<User>>` and yields the filtered view,
//! re-evaluated on every upstream emission.

use futures::{Stream, StreamExt};
use uniflow_model::User;

/// Keeps only active users.
pub fn active_only<S>(upstream: S) -> impl Stream<Item = Vec<User>> + Send + 'static
where
    S: Stream<Item = Vec<User>> + Send + 'static,
{
    upstream.map(|users| users.into_iter().filter(|u| u.is_active).collect())
}

/// Active users whose name contains `query`, case-insensitively.
///
/// A blank query matches every active user.
pub fn search_by_name<S>(
    upstream: S,
    query: impl Into<String>,
) -> impl Stream<Item = Vec<User>> + Send + 'static
where
    S: Stream<Item = Vec<User>> + Send + 'static,
{
    let needle = query.into().to_lowercase();
    upstream.map(move |users| {
        users
            .into_iter()
            .filter(|u| u.is_active && u.name.to_lowercase().contains(&needle))
            .collect()
    })
}

/// Users with a complete profile (valid name, valid email, avatar set).
pub fn complete_profiles<S>(upstream: S) -> impl Stream<Item = Vec<User>> + Send + 'static
where
    S: Stream<Item = Vec<User>> + Send + 'static,
{
    upstream.map(|users| {
        users
            .into_iter()
            .filter(User::is_profile_complete)
            .collect()
    })
}
