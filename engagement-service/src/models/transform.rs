//! Image-transformation parameter schemas.
//!
//! Pure data validation for the transformation options a client may request
//! on an uploaded photo. The media pipeline that applies them is a separate
//! service; these structs only pin down defaults and bounds.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_dimension() -> u32 {
    400
}

fn default_font_size() -> u32 {
    70
}

fn default_degree() -> i32 {
    45
}

/// Parameters for a circular crop.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformCircle {
    #[serde(default)]
    pub use_filter: bool,
    /// Circle height in pixels.
    #[serde(default = "default_dimension")]
    pub height: u32,
    /// Circle width in pixels.
    #[serde(default = "default_dimension")]
    pub width: u32,
}

/// Toggles for the artistic effect filters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformEffect {
    #[serde(default)]
    pub use_filter: bool,
    #[serde(default)]
    pub art_audrey: bool,
    #[serde(default)]
    pub art_zorro: bool,
    #[serde(default)]
    pub cartoonify: bool,
    #[serde(default)]
    pub blur: bool,
}

/// Parameters for resizing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformResize {
    #[serde(default)]
    pub use_filter: bool,
    #[serde(default)]
    pub crop: bool,
    #[serde(default)]
    pub fill: bool,
    /// New image height in pixels.
    #[serde(default = "default_dimension")]
    pub height: u32,
    /// New image width in pixels.
    #[serde(default = "default_dimension")]
    pub width: u32,
}

/// Parameters for a text overlay.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformText {
    #[serde(default)]
    pub use_filter: bool,
    /// Font size for the overlay text.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Text placed on the image, at most 100 characters.
    #[serde(default)]
    #[validate(length(max = 100))]
    pub text: String,
}

/// Parameters for rotation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformRotate {
    #[serde(default)]
    pub use_filter: bool,
    /// Image width before rotation.
    #[serde(default = "default_dimension")]
    pub width: u32,
    /// Rotation angle in degrees.
    #[serde(default = "default_degree")]
    #[validate(range(min = -360, max = 360))]
    pub degree: i32,
}

/// Full transformation request: circle, effects, resize, text overlay and
/// rotation in one body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformBody {
    #[validate(nested)]
    pub circle: TransformCircle,
    #[validate(nested)]
    pub effect: TransformEffect,
    #[validate(nested)]
    pub resize: TransformResize,
    #[validate(nested)]
    pub text: TransformText,
    #[validate(nested)]
    pub rotate: TransformRotate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_body() -> TransformBody {
        serde_json::from_value(json!({
            "circle": {},
            "effect": {},
            "resize": {},
            "text": {},
            "rotate": {},
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let body = empty_body();

        assert!(!body.circle.use_filter);
        assert_eq!(body.circle.height, 400);
        assert_eq!(body.circle.width, 400);
        assert!(!body.effect.art_audrey);
        assert!(!body.effect.blur);
        assert_eq!(body.resize.height, 400);
        assert_eq!(body.text.font_size, 70);
        assert_eq!(body.text.text, "");
        assert_eq!(body.rotate.degree, 45);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_degree_out_of_range() {
        let mut body = empty_body();
        body.rotate.degree = 400;
        assert!(body.validate().is_err());

        body.rotate.degree = -360;
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_text_too_long() {
        let mut body = empty_body();
        body.text.text = "x".repeat(101);
        assert!(body.validate().is_err());

        body.text.text = "x".repeat(100);
        assert!(body.validate().is_ok());
    }
}
