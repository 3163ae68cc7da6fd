use uniflow_model::User;

fn make_user(name: &str, email: &str) -> User {
    User::with_id("user-1", name, email)
}

// ── Name validation ──────────────────────────────────────────────

#[test]
fn valid_names_pass() {
    for name in ["김철수", "John", "테스트", "AB"] {
        assert!(make_user(name, "test@test.com").is_valid_name(), "{name}");
    }
}

#[test]
fn invalid_names_fail() {
    for name in ["", " ", "A", "  A  "] {
        assert!(!make_user(name, "test@test.com").is_valid_name(), "{name:?}");
    }
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // Two Hangul characters are six bytes but still a valid name.
    assert!(make_user("김수", "test@test.com").is_valid_name());
}

// ── Email validation ─────────────────────────────────────────────

#[test]
fn valid_emails_pass() {
    for email in ["test@example.com", "user.name@domain.co.kr", "admin@test.org"] {
        assert!(make_user("테스트", email).is_valid_email(), "{email}");
    }
}

#[test]
fn invalid_emails_fail() {
    for email in ["invalid", "test@", "test.com", "domain@com"] {
        let user = make_user("테스트", email);
        assert!(!user.is_valid_email(), "{email}");
    }
}

// ── Profile completeness & actionability ─────────────────────────

#[test]
fn complete_profile_requires_avatar() {
    let user = make_user("김철수", "kim@test.com");
    assert!(!user.is_profile_complete());

    let user = user.avatar("https://example.com/kim.png");
    assert!(user.is_profile_complete());
}

#[test]
fn active_valid_user_can_perform_actions() {
    let user = make_user("김철수", "kim@test.com");
    assert!(user.can_perform_actions());
}

#[test]
fn inactive_user_cannot_perform_actions() {
    let user = make_user("김철수", "kim@test.com").inactive();
    assert!(!user.can_perform_actions());
}

#[test]
fn invalid_name_blocks_actions() {
    let user = make_user("A", "kim@test.com");
    assert!(!user.can_perform_actions());
}

// ── Construction defaults ────────────────────────────────────────

#[test]
fn new_user_is_blank_id_active_unstamped() {
    let user = User::new("Alice", "alice@example.com");
    assert!(user.id.is_empty());
    assert!(user.is_active);
    assert_eq!(user.created_at, 0);
    assert_eq!(user.updated_at, 0);
    assert_eq!(user.avatar_url, None);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serde_roundtrip() {
    let original = User::with_id("u1", "Alice", "alice@example.com")
        .avatar("https://example.com/a.png");
    let json = serde_json::to_string(&original).unwrap();
    let parsed: User = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn deserialize_applies_defaults() {
    let parsed: User =
        serde_json::from_str(r#"{"id":"u1","name":"Alice","email":"a@b.c"}"#).unwrap();
    assert!(parsed.is_active);
    assert_eq!(parsed.avatar_url, None);
    assert_eq!(parsed.created_at, 0);
}
