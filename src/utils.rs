//! String sanitizing and conversion utilities

use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};
use serde_json::Value;

/// Placeholder substituted into image URL templates
pub const IMAGE_ID_PLACEHOLDER: &str = "{image_id}";

/// Make remote text safe to place between HTML tags
///
/// Entities already present in the input are decoded first, so the output
/// never double-encodes and `sanitize_text(sanitize_text(s)) == sanitize_text(s)`.
pub fn sanitize_text(raw: &str) -> String {
    encode_text(&decode_html_entities(raw)).into_owned()
}

/// Make remote text safe to place inside a double-quoted attribute value
///
/// Idempotent for the same reason as [`sanitize_text`].
pub fn sanitize_attribute(raw: &str) -> String {
    encode_double_quoted_attribute(&decode_html_entities(raw)).into_owned()
}

/// Build an image URL by substituting `image_id` into the template
/// Input: "https://www.artic.edu/iiif/2/{image_id}/full/843,/0/default.jpg", "abc123"
/// Output: "https://www.artic.edu/iiif/2/abc123/full/843,/0/default.jpg"
pub fn image_url(template: &str, image_id: &str) -> String {
    template.replace(IMAGE_ID_PLACEHOLDER, image_id.trim())
}

/// Coerce a scalar JSON value to displayable text
///
/// Strings pass through, numbers and booleans use their JSON spelling,
/// `null` and containers yield `None`.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
