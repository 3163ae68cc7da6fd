use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use uniflow_domain::{AddUserUseCase, GetUsersUseCase};
use uniflow_model::User;
use uniflow_repository::{DataSource, InMemoryDataSource, Repository};
use uniflow_types::CoreError;

fn user(id: &str, name: &str, email: &str) -> User {
    User::with_id(id, name, email)
}

async fn seeded(users: Vec<User>) -> Arc<Repository<User>> {
    let repo = Arc::new(Repository::new(
        InMemoryDataSource::seeded(users) as Arc<dyn DataSource<User>>
    ));
    repo.refresh().await;
    repo
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

// ── GetUsersUseCase ──────────────────────────────────────────────

#[tokio::test]
async fn invoke_yields_only_active_users_in_order() {
    let repo = seeded(vec![
        user("u1", "Alice", "alice@example.com"),
        user("u2", "Bob", "bob@example.com").inactive(),
        user("u3", "Carol", "carol@example.com"),
    ])
    .await;
    let get_users = GetUsersUseCase::new(repo);

    let mut stream = Box::pin(get_users.invoke());
    let active = stream.next().await.unwrap();
    assert_eq!(names(&active), ["Alice", "Carol"]);
}

#[tokio::test]
async fn invoke_follows_repository_commits() {
    let repo = seeded(vec![user("u1", "Alice", "alice@example.com")]).await;
    let get_users = GetUsersUseCase::new(Arc::clone(&repo));

    let mut stream = Box::pin(get_users.invoke());
    assert_eq!(stream.next().await.unwrap().len(), 1);

    repo.add(user("u2", "Bob", "bob@example.com")).await.unwrap();
    assert_eq!(names(&stream.next().await.unwrap()), ["Alice", "Bob"]);

    repo.delete("u1").await.unwrap();
    assert_eq!(names(&stream.next().await.unwrap()), ["Bob"]);
}

#[tokio::test]
async fn search_is_case_insensitive_substring_over_active_users() {
    let repo = seeded(vec![
        user("u1", "Kim", "kim@example.com"),
        user("u2", "KIMCHI", "kimchi@example.com"),
        user("u3", "kim", "kim2@example.com").inactive(),
        user("u4", "Bob", "bob@example.com"),
    ])
    .await;
    let get_users = GetUsersUseCase::new(repo);

    let mut stream = Box::pin(get_users.search_by_name("kim"));
    let hits = stream.next().await.unwrap();
    assert_eq!(names(&hits), ["Kim", "KIMCHI"]);
}

#[tokio::test]
async fn blank_query_matches_all_active_users() {
    let repo = seeded(vec![
        user("u1", "Alice", "alice@example.com"),
        user("u2", "Bob", "bob@example.com").inactive(),
    ])
    .await;
    let get_users = GetUsersUseCase::new(repo);

    let mut stream = Box::pin(get_users.search_by_name(""));
    assert_eq!(names(&stream.next().await.unwrap()), ["Alice"]);
}

#[tokio::test]
async fn complete_profiles_requires_avatar_and_valid_fields() {
    let repo = seeded(vec![
        user("u1", "Alice", "alice@example.com").avatar("https://example.com/a.png"),
        user("u2", "Bob", "bob@example.com"),
        user("u3", "C", "carol@example.com").avatar("https://example.com/c.png"),
        user("u4", "Dave", "dave@example.com")
            .avatar("https://example.com/d.png")
            .inactive(),
    ])
    .await;
    let get_users = GetUsersUseCase::new(repo);

    // Inactive users still count; short names and missing avatars do not.
    let mut stream = Box::pin(get_users.complete_profiles());
    assert_eq!(names(&stream.next().await.unwrap()), ["Alice", "Dave"]);
}

#[tokio::test]
async fn get_user_by_id_reads_current_snapshot() {
    let repo = seeded(vec![user("u1", "Alice", "alice@example.com")]).await;
    let get_users = GetUsersUseCase::new(repo);

    assert_eq!(get_users.get_user_by_id("u1").unwrap().name, "Alice");
    assert_eq!(get_users.get_user_by_id("ghost"), None);
}

#[tokio::test]
async fn find_user_by_email_ignores_case() {
    let repo = seeded(vec![user("u1", "Alice", "Alice@Example.com")]).await;
    let get_users = GetUsersUseCase::new(repo);

    let found = get_users.find_user_by_email("alice@example.COM").unwrap();
    assert_eq!(found.id, "u1");
}

// ── AddUserUseCase ───────────────────────────────────────────────

#[tokio::test]
async fn add_valid_user_stores_and_stamps() {
    let repo = seeded(Vec::new()).await;
    let add_user = AddUserUseCase::new(Arc::clone(&repo));

    let stored = add_user
        .invoke(User::new("Alice", "alice@example.com"))
        .await
        .unwrap();
    assert!(!stored.id.is_empty());
    assert!(stored.created_at > 0);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let repo = seeded(Vec::new()).await;
    let add_user = AddUserUseCase::new(Arc::clone(&repo));

    let err = add_user
        .invoke(User::new("   ", "alice@example.com"))
        .await
        .unwrap_err();
    match err {
        CoreError::Validation(message) => assert!(message.contains("empty")),
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(repo.is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let repo = seeded(Vec::new()).await;
    let add_user = AddUserUseCase::new(repo);

    for email in ["invalid", "test@", "test.com", "domain@com"] {
        let err = add_user.invoke(User::new("Alice", email)).await.unwrap_err();
        match err {
            CoreError::Validation(message) => assert!(message.contains("email")),
            other => panic!("expected validation failure for {email}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_insensitively() {
    let repo = seeded(vec![user("u1", "Alice", "alice@example.com")]).await;
    let add_user = AddUserUseCase::new(Arc::clone(&repo));

    let err = add_user
        .invoke(User::new("Alicia", "ALICE@example.com"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
    let repo = seeded(vec![user("u1", "Alice", "alice@example.com")]).await;
    let add_user = AddUserUseCase::new(repo);

    let err = add_user
        .invoke(user("u1", "Bob", "bob@example.com"))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}
