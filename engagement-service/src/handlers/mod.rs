/// HTTP handlers for engagement endpoints
///
/// Comments and ratings attached to posts, plus the cached per-post
/// counters. Route wiring lives in `configure`.
pub mod comments;
pub mod counters;
pub mod ratings;

use actix_web::web;

/// Mount all engagement routes under the caller's scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route(
                "/{post_id}/comments",
                web::post().to(comments::create_comment),
            )
            .route("/{post_id}/ratings", web::post().to(ratings::create_rate))
            .route(
                "/{post_id}/counters",
                web::get().to(counters::get_post_counters),
            ),
    )
    .service(
        web::scope("/comments").service(
            web::resource("/{comment_id}")
                .route(web::get().to(comments::get_comment))
                .route(web::put().to(comments::edit_comment))
                .route(web::delete().to(comments::delete_comment)),
        ),
    )
    .service(
        web::scope("/ratings")
            .route("", web::get().to(ratings::list_ratings))
            .route("/me", web::get().to(ratings::list_my_ratings))
            .service(
                web::resource("/{rate_id}")
                    .route(web::put().to(ratings::edit_rate))
                    .route(web::delete().to(ratings::delete_rate)),
            ),
    )
    .service(
        web::scope("/users")
            .route(
                "/{user_id}/comments",
                web::get().to(comments::list_user_comments),
            )
            .route(
                "/{user_id}/posts/{post_id}/comments",
                web::get().to(comments::list_user_post_comments),
            )
            .route(
                "/{user_id}/posts/{post_id}/rating",
                web::get().to(ratings::get_user_post_rating),
            ),
    );
}
