//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    timeout_from_secs, Config, LogFormat, DEFAULT_ART_CONTAINER, DEFAULT_ART_URL,
    DEFAULT_IMAGE_URL_TEMPLATE, DEFAULT_SOCIAL_CONTAINER, DEFAULT_SOCIAL_URL,
    DEFAULT_TIMEOUT_SECS,
};

/// Fetch artwork from the Art Institute of Chicago API and render it as a
/// grid of cards in an HTML page
#[derive(Debug, Parser)]
#[command(name = "gallery-cards", version)]
pub struct Cli {
    /// Artwork listing endpoint
    #[arg(long, env = "GALLERY_ART_URL", default_value = DEFAULT_ART_URL)]
    pub art_url: String,

    /// Social posts endpoint
    #[arg(long, env = "GALLERY_SOCIAL_URL", default_value = DEFAULT_SOCIAL_URL)]
    pub social_url: String,

    /// Image URL template; `{image_id}` is replaced per artwork
    #[arg(long, env = "GALLERY_IMAGE_URL_TEMPLATE", default_value = DEFAULT_IMAGE_URL_TEMPLATE)]
    pub image_url_template: String,

    /// HTML page to render into (defaults to a built-in page)
    #[arg(long, env = "GALLERY_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Id of the element artwork cards are appended to
    #[arg(long, env = "GALLERY_ART_CONTAINER", default_value = DEFAULT_ART_CONTAINER)]
    pub art_container: String,

    /// Also fetch social posts and append them to this element id
    #[arg(long, env = "GALLERY_SOCIAL_CONTAINER")]
    pub social_container: Option<String>,

    /// Shorthand for `--social-container social-container`; a named
    /// container wins when both are given
    #[arg(long)]
    pub social: bool,

    /// Request timeout in seconds, 0 to wait forever
    #[arg(long, env = "GALLERY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "GALLERY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "GALLERY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let social_container = match (self.social_container, self.social) {
            (Some(id), _) => Some(id),
            (None, true) => Some(DEFAULT_SOCIAL_CONTAINER.to_string()),
            (None, false) => None,
        };

        Config {
            art_url: self.art_url,
            social_url: self.social_url,
            image_url_template: self.image_url_template,
            template: self.template,
            art_container: self.art_container,
            social_container,
            output: self.output,
            request_timeout: timeout_from_secs(self.timeout_secs),
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}
