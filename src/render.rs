//! HTML card generation from artwork and post records

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RecordError;
use crate::models::{Artwork, SocialPost};
use crate::page::Container;
use crate::parser::{parse_artwork, parse_social_post};
use crate::utils::{image_url, sanitize_attribute, sanitize_text};

/// Responsive grid column each card sits in
pub const CARD_COLUMN_CLASS: &str = "col-lg-4 col-md-6 col-sm-12 mb-4";

/// Delimiter between category titles on an artwork card
pub const CATEGORY_DELIMITER: &str = ", ";

const UNKNOWN: &str = "Unknown";

/// Counts from rendering one batch of raw records into a container
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub rendered: usize,
    pub skipped: usize,
}

/// A record kind that can be validated and rendered as a card.
///
/// Artwork and social posts share this contract so the orchestrator can
/// drive either one the same way.
pub trait CardRenderer {
    type Record;

    /// Short name used in log lines
    const KIND: &'static str;

    fn parse(&self, value: &Value) -> Result<Self::Record, RecordError>;

    fn markup(&self, record: &Self::Record) -> String;

    /// Validate and append every record in order.
    /// A record that fails validation is logged and skipped; the rest still render.
    fn render_all(&self, container: &Container, values: &[Value]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (index, value) in values.iter().enumerate() {
            match self.parse(value) {
                Ok(record) => {
                    container.append_markup(&self.markup(&record));
                    outcome.rendered += 1;
                }
                Err(e) => {
                    warn!(
                        kind = Self::KIND,
                        index,
                        container = container.id(),
                        "skipping record: {e}"
                    );
                    outcome.skipped += 1;
                }
            }
        }

        debug!(
            kind = Self::KIND,
            rendered = outcome.rendered,
            skipped = outcome.skipped,
            "batch rendered"
        );
        outcome
    }
}

pub struct ArtCardRenderer<'a> {
    image_url_template: &'a str,
}

impl<'a> ArtCardRenderer<'a> {
    pub fn new(image_url_template: &'a str) -> Self {
        Self { image_url_template }
    }
}

impl CardRenderer for ArtCardRenderer<'_> {
    type Record = Artwork;
    const KIND: &'static str = "artwork";

    fn parse(&self, value: &Value) -> Result<Artwork, RecordError> {
        parse_artwork(value)
    }

    fn markup(&self, record: &Artwork) -> String {
        art_card_markup(record, self.image_url_template)
    }
}

pub struct PostCardRenderer;

impl CardRenderer for PostCardRenderer {
    type Record = SocialPost;
    const KIND: &'static str = "social post";

    fn parse(&self, value: &Value) -> Result<SocialPost, RecordError> {
        parse_social_post(value)
    }

    fn markup(&self, record: &SocialPost) -> String {
        post_card_markup(record)
    }
}

/// Generate the card markup for one artwork
///
/// # Arguments
/// * `art` - The validated artwork record
/// * `image_url_template` - Template containing `{image_id}`
///
/// # Returns
/// A single column element wrapping a card. All record text is sanitized.
pub fn art_card_markup(art: &Artwork, image_url_template: &str) -> String {
    let mut markup = String::new();

    markup.push_str(&format!("<div class=\"{}\">", CARD_COLUMN_CLASS));
    markup.push_str("<div class=\"card\">");
    markup.push_str(&format!(
        "<div class=\"card-header text-center\">{}</div>",
        sanitize_text(&art.title)
    ));
    markup.push_str("<div class=\"card-body\">");

    // No image id means no image, rather than a broken URL
    if let Some(image_id) = &art.image_id {
        markup.push_str(&format!(
            "<img src=\"{}\" class=\"card-img-top\" alt=\"{}\">",
            sanitize_attribute(&image_url(image_url_template, image_id)),
            sanitize_attribute(&art.title)
        ));
    }

    markup.push_str(&format!(
        "<p class=\"card-text mt-4\"><strong>Artist:</strong> {}</p>",
        sanitize_text(art.artist_title.as_deref().unwrap_or(UNKNOWN))
    ));
    markup.push_str(&format!(
        "<p class=\"card-text\"><strong>Category:</strong> {}</p>",
        sanitize_text(&art.category_titles.join(CATEGORY_DELIMITER))
    ));
    markup.push_str(&format!(
        "<p class=\"card-text\"><strong>Medium:</strong> {}</p>",
        sanitize_text(art.medium_display.as_deref().unwrap_or(UNKNOWN))
    ));

    markup.push_str("</div></div></div>");
    markup
}

/// Generate the card markup for one social post
pub fn post_card_markup(post: &SocialPost) -> String {
    let mut markup = String::new();

    markup.push_str(&format!("<div class=\"{}\">", CARD_COLUMN_CLASS));
    markup.push_str("<div class=\"card\">");
    markup.push_str(&format!(
        "<div class=\"card-header\">{}</div>",
        sanitize_text(&post.title)
    ));
    markup.push_str(&format!(
        "<div class=\"card-body\"><p class=\"card-text\">{}</p></div>",
        sanitize_text(&post.body)
    ));

    let mut footer = String::from("Post");
    if let Some(id) = &post.id {
        footer.push_str(&format!(" #{}", id));
    }
    if let Some(user_id) = &post.user_id {
        footer.push_str(&format!(" by user {}", user_id));
    }
    markup.push_str(&format!(
        "<div class=\"card-footer text-muted\">{}</div>",
        sanitize_text(&footer)
    ));

    markup.push_str("</div></div>");
    markup
}

/// Append one artwork card to `container`
pub fn create_art_card(container: &Container, art: &Artwork, image_url_template: &str) {
    container.append_markup(&art_card_markup(art, image_url_template));
}

/// Append one social post card to `container`
pub fn create_post_card(container: &Container, post: &SocialPost) {
    container.append_markup(&post_card_markup(post));
}
