/// Authorization checks for engagement entities
///
/// A comment or rating may be managed by its author or by a caller holding
/// an elevated role (moder/admin).
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Actor;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Check that the actor may view or modify a comment owned by `author_id`.
pub fn check_comment_access(actor: &Actor, author_id: Uuid) -> PermissionResult {
    check_owner_or_elevated(actor, author_id, "Not authorized to manage this comment.")
}

/// Check that the actor may modify a rating cast by `voter_id`.
pub fn check_rating_access(actor: &Actor, voter_id: Uuid) -> PermissionResult {
    check_owner_or_elevated(actor, voter_id, "Not authorized to manage this rating.")
}

fn check_owner_or_elevated(actor: &Actor, owner_id: Uuid, message: &str) -> PermissionResult {
    if actor.id == owner_id || actor.role.has_elevated_privilege() {
        Ok(())
    } else {
        Err(AppError::Forbidden(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn actor(role: UserRole) -> Actor {
        Actor {
            id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_author_allowed() {
        let author = actor(UserRole::User);
        assert!(check_comment_access(&author, author.id).is_ok());
        assert!(check_rating_access(&author, author.id).is_ok());
    }

    #[test]
    fn test_elevated_roles_allowed() {
        let owner = Uuid::new_v4();
        assert!(check_comment_access(&actor(UserRole::Moder), owner).is_ok());
        assert!(check_comment_access(&actor(UserRole::Admin), owner).is_ok());
    }

    #[test]
    fn test_other_user_forbidden() {
        let other = actor(UserRole::User);
        let result = check_comment_access(&other, Uuid::new_v4());
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
