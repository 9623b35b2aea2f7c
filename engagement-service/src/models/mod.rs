pub mod transform;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Role attached to an authenticated user by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Moder,
    Admin,
}

impl UserRole {
    /// Moderators and admins may manage any user's comment or rating.
    pub fn has_elevated_privilege(self) -> bool {
        matches!(self, UserRole::Moder | UserRole::Admin)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "moder" => Ok(UserRole::Moder),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Authenticated caller resolved by the upstream gateway.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: Uuid,
    pub role: UserRole,
}

/// Comment entity - a user's comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Advances when the comment is edited.
    pub updated_at: DateTime<Utc>,
    /// True once the comment has been edited.
    pub update_status: bool,
}

/// Rating entity - a user's vote on a post
///
/// At most one rating per (post_id, user_id); enforced by a unique
/// constraint in the schema.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    /// Intended domain is ±1; the value is stored as-is.
    pub rate: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevated_privilege() {
        assert!(!UserRole::User.has_elevated_privilege());
        assert!(UserRole::Moder.has_elevated_privilege());
        assert!(UserRole::Admin.has_elevated_privilege());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("moder".parse::<UserRole>().unwrap(), UserRole::Moder);
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("root".parse::<UserRole>().is_err());
    }
}
