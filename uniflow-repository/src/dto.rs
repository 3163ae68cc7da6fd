//! Wire representation of a user.
//!
//! Remote data sources speak this shape; the domain model never leaves the
//! core. Timestamps are optional on the wire — absent means unset.

use serde::{Deserialize, Serialize};
use uniflow_model::User;

/// Data-transfer shape for user API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

fn default_active() -> bool {
    true
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            avatar_url: dto.avatar_url,
            is_active: dto.is_active,
            created_at: dto.created_at.unwrap_or(0),
            updated_at: dto.updated_at.unwrap_or(0),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            is_active: user.is_active,
            created_at: (user.created_at != 0).then_some(user.created_at),
            updated_at: (user.updated_at != 0).then_some(user.updated_at),
        }
    }
}
