//! Runtime configuration
//!
//! Every setting comes from a command-line flag, falls back to a `GALLERY_*`
//! environment variable, and then to the defaults below.
//!
//! ## Defaults
//!
//! - art endpoint: `https://api.artic.edu/api/v1/artworks`
//! - social endpoint: `https://jsonplaceholder.typicode.com/posts`
//! - image template: `https://www.artic.edu/iiif/2/{image_id}/full/843,/0/default.jpg`
//! - art container id: `art-container`
//! - request timeout: 30 seconds (`0` disables it)
//! - log level `info`, text format; `RUST_LOG` overrides the level when set

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::app::Endpoints;

pub const DEFAULT_ART_URL: &str = "https://api.artic.edu/api/v1/artworks";
pub const DEFAULT_SOCIAL_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_IMAGE_URL_TEMPLATE: &str =
    "https://www.artic.edu/iiif/2/{image_id}/full/843,/0/default.jpg";
pub const DEFAULT_ART_CONTAINER: &str = "art-container";
pub const DEFAULT_SOCIAL_CONTAINER: &str = "social-container";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub art_url: String,
    pub social_url: String,
    pub image_url_template: String,
    /// Page shell to render into; the built-in shell is used when unset
    pub template: Option<PathBuf>,
    pub art_container: String,
    /// Social posts are only fetched and rendered when this is set
    pub social_container: Option<String>,
    /// Where to write the page; stdout when unset
    pub output: Option<PathBuf>,
    /// `None` means requests may wait forever
    pub request_timeout: Option<Duration>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            art_url: self.art_url.clone(),
            social_url: self.social_url.clone(),
            image_url_template: self.image_url_template.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            art_url: DEFAULT_ART_URL.to_string(),
            social_url: DEFAULT_SOCIAL_URL.to_string(),
            image_url_template: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
            template: None,
            art_container: DEFAULT_ART_CONTAINER.to_string(),
            social_container: None,
            output: None,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Seconds to an optional timeout, where zero means no timeout
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
