/// Rating handlers - HTTP endpoints for rating operations
use crate::cache::EngagementCounters;
use crate::error::{AppError, Result};
use crate::metrics::{ENGAGEMENT_OPERATIONS_TOTAL, ENGAGEMENT_REJECTIONS_TOTAL};
use crate::models::Actor;
use crate::services::RatingService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for casting or editing a rating
#[derive(Deserialize)]
pub struct RatingRequest {
    pub rate: i32,
}

/// Cast a vote on a post
pub async fn create_rate(
    pool: web::Data<PgPool>,
    counters: web::Data<EngagementCounters>,
    post_id: web::Path<Uuid>,
    actor: Actor,
    req: web::Json<RatingRequest>,
) -> Result<HttpResponse> {
    let service = RatingService::new((**pool).clone());
    let rating = match service.create_rate(*post_id, req.rate, &actor).await {
        Ok(rating) => rating,
        Err(err) => {
            if matches!(err, AppError::Conflict(_)) {
                ENGAGEMENT_REJECTIONS_TOTAL
                    .with_label_values(&["vote_conflict"])
                    .inc();
            }
            return Err(err);
        }
    };

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["rating", "create"])
        .inc();
    if let Err(e) = counters.increment_rating_count(rating.post_id).await {
        tracing::warn!(post_id = %rating.post_id, error = %e, "failed to bump rating counter");
    }

    Ok(HttpResponse::Created().json(rating))
}

/// Overwrite a rating's value
pub async fn edit_rate(
    pool: web::Data<PgPool>,
    rate_id: web::Path<Uuid>,
    actor: Actor,
    req: web::Json<RatingRequest>,
) -> Result<HttpResponse> {
    let service = RatingService::new((**pool).clone());
    let rating = service.edit_rate(*rate_id, req.rate, &actor).await?;

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["rating", "edit"])
        .inc();

    Ok(HttpResponse::Ok().json(rating))
}

/// Delete a rating; responds with the removed entity
pub async fn delete_rate(
    pool: web::Data<PgPool>,
    counters: web::Data<EngagementCounters>,
    rate_id: web::Path<Uuid>,
    actor: Actor,
) -> Result<HttpResponse> {
    let service = RatingService::new((**pool).clone());
    let rating = service.delete_rate(*rate_id, &actor).await?;

    ENGAGEMENT_OPERATIONS_TOTAL
        .with_label_values(&["rating", "delete"])
        .inc();
    if let Err(e) = counters.decrement_rating_count(rating.post_id).await {
        tracing::warn!(post_id = %rating.post_id, error = %e, "failed to drop rating counter");
    }

    Ok(HttpResponse::Ok().json(rating))
}

/// List every rating in the system (any authenticated caller)
pub async fn list_ratings(pool: web::Data<PgPool>, _actor: Actor) -> Result<HttpResponse> {
    let service = RatingService::new((**pool).clone());
    let ratings = service.list_ratings().await?;

    Ok(HttpResponse::Ok().json(ratings))
}

/// List the ratings cast by the calling user
pub async fn list_my_ratings(pool: web::Data<PgPool>, actor: Actor) -> Result<HttpResponse> {
    let service = RatingService::new((**pool).clone());
    let ratings = service.list_user_ratings(actor.id).await?;

    Ok(HttpResponse::Ok().json(ratings))
}

/// The rating a specific user cast on a specific post
pub async fn get_user_post_rating(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let service = RatingService::new((**pool).clone());

    match service.get_user_rating_for_post(user_id, post_id).await? {
        Some(rating) => Ok(HttpResponse::Ok().json(rating)),
        None => Err(AppError::NotFound("Rating not found.".to_string())),
    }
}
