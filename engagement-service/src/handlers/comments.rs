/// Comment handlers - HTTP endpoints for comment operations
use crate::cache::EngagementCounters;
use crate::error::Result;
use crate::metrics::ENGAGEMENT_OPERATIONS_TOTAL;
use crate::models::Actor;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for creating or editing a comment
#[derive(Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    counters: web::Data<EngagementCounters>,
    post_id: web::Path<Uuid>,
    actor: Actor,
    req: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.create_comment(*post_id, &req.text, &actor).await?;

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["comment", "create"])
        .inc();
    if let Err(e) = counters.increment_comment_count(comment.post_id).await {
        tracing::warn!(post_id = %comment.post_id, error = %e, "failed to bump comment counter");
    }

    Ok(HttpResponse::Created().json(comment))
}

/// Get a single comment (author or elevated role only)
pub async fn get_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    actor: Actor,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.get_comment(*comment_id, &actor).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Replace a comment's text
pub async fn edit_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    actor: Actor,
    req: web::Json<CommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.edit_comment(*comment_id, &req.text, &actor).await?;

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["comment", "edit"])
        .inc();

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment; responds with the removed entity
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    counters: web::Data<EngagementCounters>,
    comment_id: web::Path<Uuid>,
    actor: Actor,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.delete_comment(*comment_id, &actor).await?;

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["comment", "delete"])
        .inc();
    if let Err(e) = counters.decrement_comment_count(comment.post_id).await {
        tracing::warn!(post_id = %comment.post_id, error = %e, "failed to drop comment counter");
    }

    Ok(HttpResponse::Ok().json(comment))
}

/// List all comments authored by a user
pub async fn list_user_comments(
    pool: web::Data<PgPool>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.list_user_comments(*user_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// List a user's comments on a specific post
pub async fn list_user_post_comments(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let service = CommentService::new((**pool).clone());
    let comments = service.list_user_post_comments(user_id, post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
