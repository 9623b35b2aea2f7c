/// Redis-backed engagement counters
///
/// Keys: post:{post_id}:comments, post:{post_id}:ratings
/// TTL: 7 days (604800 seconds)
///
/// Reads fall back to PostgreSQL on a cache miss and warm the key. Writers
/// treat counter updates as best-effort; a failed update is logged by the
/// caller, never returned to the client.
use anyhow::{Context, Result};
use redis::{aio::ConnectionManager, AsyncCommands};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct EngagementCounters {
    redis: ConnectionManager,
    pg_pool: PgPool,
}

impl EngagementCounters {
    /// TTL for counter keys (7 days) - for set_ex (u64)
    const COUNTER_TTL_U64: u64 = 604800;
    /// TTL for counter keys (7 days) - for expire (i64)
    const COUNTER_TTL_I64: i64 = 604800;

    pub fn new(redis: ConnectionManager, pg_pool: PgPool) -> Self {
        Self { redis, pg_pool }
    }

    /// Round-trip liveness probe used by readiness checks and the health
    /// worker.
    pub async fn ping(&self) -> Result<()> {
        let pong: String = redis::cmd("PING")
            .query_async(&mut self.redis.clone())
            .await
            .context("Redis PING failed")?;

        if pong == "PONG" {
            Ok(())
        } else {
            anyhow::bail!("unexpected PING response: {pong}")
        }
    }

    // ========== Comment counters ==========

    pub async fn increment_comment_count(&self, post_id: Uuid) -> Result<i64> {
        self.increment(&comment_key(post_id)).await
    }

    pub async fn decrement_comment_count(&self, post_id: Uuid) -> Result<i64> {
        self.decrement(&comment_key(post_id)).await
    }

    /// Comment count for a post, with PostgreSQL fallback on cache miss.
    pub async fn get_comment_count(&self, post_id: Uuid) -> Result<i64> {
        let key = comment_key(post_id);
        let cached: Option<i64> = self
            .redis
            .clone()
            .get(&key)
            .await
            .context("failed to read comment counter")?;

        match cached {
            Some(count) => Ok(count),
            None => {
                let count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
                        .bind(post_id)
                        .fetch_one(&self.pg_pool)
                        .await
                        .context("failed to count comments")?;
                self.warm(&key, count).await?;
                Ok(count)
            }
        }
    }

    // ========== Rating counters ==========

    pub async fn increment_rating_count(&self, post_id: Uuid) -> Result<i64> {
        self.increment(&rating_key(post_id)).await
    }

    pub async fn decrement_rating_count(&self, post_id: Uuid) -> Result<i64> {
        self.decrement(&rating_key(post_id)).await
    }

    /// Rating count for a post, with PostgreSQL fallback on cache miss.
    pub async fn get_rating_count(&self, post_id: Uuid) -> Result<i64> {
        let key = rating_key(post_id);
        let cached: Option<i64> = self
            .redis
            .clone()
            .get(&key)
            .await
            .context("failed to read rating counter")?;

        match cached {
            Some(count) => Ok(count),
            None => {
                let count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE post_id = $1")
                        .bind(post_id)
                        .fetch_one(&self.pg_pool)
                        .await
                        .context("failed to count ratings")?;
                self.warm(&key, count).await?;
                Ok(count)
            }
        }
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let new_count: i64 = self
            .redis
            .clone()
            .incr(key, 1)
            .await
            .context("failed to increment counter")?;

        // Set TTL on first increment
        if new_count == 1 {
            let _: () = self
                .redis
                .clone()
                .expire(key, Self::COUNTER_TTL_I64)
                .await
                .context("failed to set counter TTL")?;
        }

        Ok(new_count)
    }

    async fn decrement(&self, key: &str) -> Result<i64> {
        // Keep the counter from going negative
        let current: i64 = self.redis.clone().get(key).await.unwrap_or(0);

        if current > 0 {
            let new_count: i64 = self
                .redis
                .clone()
                .decr(key, 1)
                .await
                .context("failed to decrement counter")?;
            Ok(new_count)
        } else {
            Ok(0)
        }
    }

    async fn warm(&self, key: &str, count: i64) -> Result<()> {
        let _: () = self
            .redis
            .clone()
            .set_ex(key, count, Self::COUNTER_TTL_U64)
            .await
            .context("failed to warm counter")?;
        Ok(())
    }
}

fn comment_key(post_id: Uuid) -> String {
    format!("post:{}:comments", post_id)
}

fn rating_key(post_id: Uuid) -> String {
    format!("post:{}:ratings", post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_keys() {
        let id = Uuid::nil();
        assert_eq!(
            comment_key(id),
            "post:00000000-0000-0000-0000-000000000000:comments"
        );
        assert_eq!(
            rating_key(id),
            "post:00000000-0000-0000-0000-000000000000:ratings"
        );
    }
}
