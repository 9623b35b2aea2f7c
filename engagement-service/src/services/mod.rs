/// Service layer for the engagement core
///
/// Authorization checks layered over single-row queries; handlers stay thin.
pub mod comments;
pub mod ratings;

pub use comments::CommentService;
pub use ratings::RatingService;
