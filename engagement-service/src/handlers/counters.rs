/// Counter handlers - cached per-post engagement counts
use crate::cache::EngagementCounters;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// Comment and rating counts for a post, served from Redis with a
/// PostgreSQL fallback.
pub async fn get_post_counters(
    counters: web::Data<EngagementCounters>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = *post_id;

    let comments = counters
        .get_comment_count(post_id)
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;
    let ratings = counters
        .get_rating_count(post_id)
        .await
        .map_err(|e| AppError::Cache(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "post_id": post_id,
        "comments": comments,
        "ratings": ratings,
    })))
}
