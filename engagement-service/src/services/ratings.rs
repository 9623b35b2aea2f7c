/// Rating service - vote rules and authorization for post ratings
use crate::error::{AppError, Result};
use crate::middleware::permissions;
use crate::models::{Actor, Rating};
use sqlx::PgPool;
use uuid::Uuid;

/// Unique constraint backing the one-vote-per-post invariant.
const VOTE_UNIQUE_CONSTRAINT: &str = "ratings_post_id_user_id_key";

const OWN_POST: &str = "Cannot rate your own post.";
const ALREADY_VOTED: &str = "Post already rated.";

pub struct RatingService {
    pool: PgPool,
}

impl RatingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cast a vote on a post.
    ///
    /// The self-post and double-vote rules are checked before existence, so
    /// their conflicts take precedence over a missing post. The unique index
    /// on (post_id, user_id) is the final arbiter when two votes race past
    /// the read check.
    pub async fn create_rate(&self, post_id: Uuid, rate: i32, actor: &Actor) -> Result<Rating> {
        let post_author: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM posts WHERE id = $1")
                .bind(post_id)
                .fetch_optional(&self.pool)
                .await?;

        if post_author == Some(actor.id) {
            return Err(AppError::Conflict(OWN_POST.to_string()));
        }

        let existing_vote: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM ratings WHERE post_id = $1 AND user_id = $2")
                .bind(post_id)
                .bind(actor.id)
                .fetch_optional(&self.pool)
                .await?;

        if existing_vote.is_some() {
            return Err(AppError::Conflict(ALREADY_VOTED.to_string()));
        }

        if post_author.is_none() {
            return Err(AppError::NotFound("Post not found.".to_string()));
        }

        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (post_id, user_id, rate)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id, rate, created_at
            "#,
        )
        .bind(post_id)
        .bind(actor.id)
        .bind(rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.constraint() == Some(VOTE_UNIQUE_CONSTRAINT) {
                    return AppError::Conflict(ALREADY_VOTED.to_string());
                }
            }
            AppError::from(err)
        })?;

        Ok(rating)
    }

    /// Overwrite a rating's value. Allowed for the voter or an elevated
    /// role. The vote rules are not revalidated on edit.
    pub async fn edit_rate(&self, rate_id: Uuid, new_rate: i32, actor: &Actor) -> Result<Rating> {
        let rating = self.require_rating(rate_id).await?;
        permissions::check_rating_access(actor, rating.user_id)?;

        sqlx::query_as::<_, Rating>(
            r#"
            UPDATE ratings
            SET rate = $2
            WHERE id = $1
            RETURNING id, post_id, user_id, rate, created_at
            "#,
        )
        .bind(rate_id)
        .bind(new_rate)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(rating_not_found)
    }

    /// Delete a rating and return the removed row. Allowed for the voter or
    /// an elevated role.
    pub async fn delete_rate(&self, rate_id: Uuid, actor: &Actor) -> Result<Rating> {
        let rating = self.require_rating(rate_id).await?;
        permissions::check_rating_access(actor, rating.user_id)?;

        sqlx::query_as::<_, Rating>(
            r#"
            DELETE FROM ratings
            WHERE id = $1
            RETURNING id, post_id, user_id, rate, created_at
            "#,
        )
        .bind(rate_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(rating_not_found)
    }

    /// Every rating in the system, oldest first.
    pub async fn list_ratings(&self) -> Result<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, post_id, user_id, rate, created_at
            FROM ratings
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ratings)
    }

    /// All ratings cast by a user, oldest first.
    pub async fn list_user_ratings(&self, user_id: Uuid) -> Result<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, post_id, user_id, rate, created_at
            FROM ratings
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ratings)
    }

    /// The single rating a user cast on a post, if any.
    pub async fn get_user_rating_for_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<Option<Rating>> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, post_id, user_id, rate, created_at
            FROM ratings
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rating)
    }

    async fn require_rating(&self, rate_id: Uuid) -> Result<Rating> {
        sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, post_id, user_id, rate, created_at
            FROM ratings
            WHERE id = $1
            "#,
        )
        .bind(rate_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(rating_not_found)
    }
}

fn rating_not_found() -> AppError {
    AppError::NotFound("Rating not found.".to_string())
}
