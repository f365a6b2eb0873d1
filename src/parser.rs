//! JSON record extraction and validation

use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::models::{Artwork, SocialPost};
use crate::utils::value_to_text;

/// Extract a renderable artwork from one element of the API `data` array
pub fn parse_artwork(value: &Value) -> Result<Artwork, RecordError> {
    let record = value.as_object().ok_or(RecordError::NotAnObject)?;

    Ok(Artwork {
        title: required_text(record, "title")?,
        artist_title: optional_text(record, "artist_title")?,
        category_titles: text_list(record, "category_titles")?,
        medium_display: optional_text(record, "medium_display")?,
        image_id: optional_text(record, "image_id")?.filter(|id| !id.trim().is_empty()),
    })
}

/// Extract a renderable post from one element of the posts array
pub fn parse_social_post(value: &Value) -> Result<SocialPost, RecordError> {
    let record = value.as_object().ok_or(RecordError::NotAnObject)?;

    Ok(SocialPost {
        id: optional_text(record, "id")?,
        user_id: optional_text(record, "userId")?,
        title: required_text(record, "title")?,
        body: required_text(record, "body")?,
    })
}

fn required_text(record: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    optional_text(record, field)?.ok_or(RecordError::MissingField(field))
}

/// `null` and an absent key both mean "no value"
fn optional_text(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, RecordError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value_to_text(value)
            .map(Some)
            .ok_or(RecordError::InvalidField {
                field,
                expected: "text",
            }),
    }
}

fn text_list(record: &Map<String, Value>, field: &'static str) -> Result<Vec<String>, RecordError> {
    let items = match record.get(field) {
        None | Some(Value::Null) => return Err(RecordError::MissingField(field)),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(RecordError::InvalidField {
                field,
                expected: "a list of text",
            })
        }
    };

    let mut list = Vec::with_capacity(items.len());
    for item in items {
        match item {
            // Holes in the list are dropped rather than rendered as "null"
            Value::Null => {}
            other => list.push(value_to_text(other).ok_or(RecordError::InvalidField {
                field,
                expected: "a list of text",
            })?),
        }
    }
    Ok(list)
}
