//! Data models for artwork and social post records

use serde::Deserialize;
use serde_json::Value;

/// One museum catalog entry, validated and ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub title: String,
    pub artist_title: Option<String>,
    pub category_titles: Vec<String>,
    pub medium_display: Option<String>,
    pub image_id: Option<String>,
}

/// One post from the placeholder social API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPost {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: String,
    pub body: String,
}

/// Response envelope of the artwork listing endpoint.
/// Only `data` is read; `pagination`, `info` and `config` are ignored.
#[derive(Debug, Deserialize)]
pub struct ArtworkEnvelope {
    pub data: Vec<Value>,
}
