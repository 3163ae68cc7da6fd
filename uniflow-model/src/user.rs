use serde::{Deserialize, Serialize};

/// A user of the application.
///
/// `created_at`/`updated_at` are epoch milliseconds; `0` means unset (the
/// repository stamps them on write). A blank `id` means "not yet stored" —
/// the repository assigns one on `add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Creates an active user with a blank id and unset timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            avatar_url: None,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Same as [`User::new`] but with an explicit id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            ..Self::new(name, email)
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Marks the user inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// A name is valid when it is non-blank and at least two characters
    /// long after trimming.
    #[must_use]
    pub fn is_valid_name(&self) -> bool {
        let trimmed = self.name.trim();
        !trimmed.is_empty() && trimmed.chars().count() >= 2
    }

    /// An email is valid when it contains both `@` and `.`.
    ///
    /// Deliberately simple — the core is not an RFC 5322 validator.
    #[must_use]
    pub fn is_valid_email(&self) -> bool {
        self.email.contains('@') && self.email.contains('.')
    }

    /// A profile is complete when name and email are valid and an avatar
    /// is present.
    #[must_use]
    pub fn is_profile_complete(&self) -> bool {
        self.is_valid_name() && self.is_valid_email() && self.avatar_url.is_some()
    }

    /// Whether the user may perform actions: active with valid name and
    /// email.
    #[must_use]
    pub fn can_perform_actions(&self) -> bool {
        self.is_active && self.is_valid_name() && self.is_valid_email()
    }
}
