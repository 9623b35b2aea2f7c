/// HTTP middleware utilities for the engagement service
///
/// The gateway terminates authentication and forwards the caller's identity
/// downstream as headers; handlers receive it through the `Actor` extractor.
pub mod permissions;

pub use permissions::*;

use actix_web::{error::ErrorUnauthorized, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{Actor, UserRole};

/// Header carrying the authenticated user id, set by the gateway.
pub const USER_ID_HEADER: &str = "X-User-Id";
/// Header carrying the authenticated user role, set by the gateway.
pub const USER_ROLE_HEADER: &str = "X-User-Role";

impl FromRequest for Actor {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(actor_from_request(req))
    }
}

fn actor_from_request(req: &HttpRequest) -> Result<Actor, Error> {
    let raw_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing X-User-Id header"))?;

    let id = Uuid::parse_str(raw_id).map_err(|_| ErrorUnauthorized("Invalid user ID"))?;

    let role = match req.headers().get(USER_ROLE_HEADER) {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| ErrorUnauthorized("Invalid user role"))?;
            UserRole::from_str(raw).map_err(ErrorUnauthorized)?
        }
        None => UserRole::User,
    };

    Ok(Actor { id, role })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_actor_from_headers() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .insert_header((USER_ROLE_HEADER, "moder"))
            .to_http_request();

        let actor = Actor::extract(&req).await.unwrap();
        assert_eq!(actor.id, id);
        assert_eq!(actor.role, UserRole::Moder);
    }

    #[actix_web::test]
    async fn test_role_defaults_to_user() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .to_http_request();

        let actor = Actor::extract(&req).await.unwrap();
        assert_eq!(actor.role, UserRole::User);
    }

    #[actix_web::test]
    async fn test_missing_identity_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(Actor::extract(&req).await.is_err());

        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        assert!(Actor::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_unknown_role_rejected() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .insert_header((USER_ROLE_HEADER, "root"))
            .to_http_request();

        assert!(Actor::extract(&req).await.is_err());
    }
}
