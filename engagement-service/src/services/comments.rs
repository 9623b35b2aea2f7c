/// Comment service - the authorization-and-mutation workflow for post comments
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::{Actor, Comment};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment on a post, owned by the actor.
    ///
    /// The post id is taken as-is; a dangling id surfaces as a database
    /// error through the foreign key rather than a pre-check.
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        text: &str,
        actor: &Actor,
    ) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, text, created_at, updated_at, update_status
            "#,
        )
        .bind(post_id)
        .bind(actor.id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Replace a comment's text. Allowed for the author or an elevated role.
    ///
    /// Advances `updated_at` and marks the comment as edited.
    pub async fn edit_comment(
        &self,
        comment_id: Uuid,
        text: &str,
        actor: &Actor,
    ) -> Result<Comment> {
        let comment = self.require_comment(comment_id).await?;
        permissions::check_comment_access(actor, comment.user_id)?;

        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET text = $2, updated_at = NOW(), update_status = TRUE
            WHERE id = $1
            RETURNING id, post_id, user_id, text, created_at, updated_at, update_status
            "#,
        )
        .bind(comment_id)
        .bind(text)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(comment_not_found)
    }

    /// Delete a comment and return the removed row. Allowed for the author
    /// or an elevated role.
    pub async fn delete_comment(&self, comment_id: Uuid, actor: &Actor) -> Result<Comment> {
        let comment = self.require_comment(comment_id).await?;
        permissions::check_comment_access(actor, comment.user_id)?;

        sqlx::query_as::<_, Comment>(
            r#"
            DELETE FROM comments
            WHERE id = $1
            RETURNING id, post_id, user_id, text, created_at, updated_at, update_status
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(comment_not_found)
    }

    /// Get a single comment. Visible to its author or an elevated role.
    pub async fn get_comment(&self, comment_id: Uuid, actor: &Actor) -> Result<Comment> {
        let comment = self.require_comment(comment_id).await?;
        permissions::check_comment_access(actor, comment.user_id)?;
        Ok(comment)
    }

    /// All comments authored by a user, oldest first.
    pub async fn list_user_comments(&self, user_id: Uuid) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, text, created_at, updated_at, update_status
            FROM comments
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// All comments by a user on a specific post, oldest first.
    pub async fn list_user_post_comments(
        &self,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, text, created_at, updated_at, update_status
            FROM comments
            WHERE user_id = $1 AND post_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn require_comment(&self, comment_id: Uuid) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, user_id, text, created_at, updated_at, update_status
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(comment_not_found)
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found or not available.".to_string())
}
