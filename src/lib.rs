//! Library for fetching museum artwork and rendering it as HTML cards

pub mod app;
pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod page;
pub mod parser;
pub mod render;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export main types and functions for convenient access
pub use app::{Endpoints, Orchestrator, Phase, RunReport, Targets};
pub use error::{FetchError, RecordError, RenderError};
pub use fetch::{fetch_art_data, fetch_social_data, HttpTransport, Transport};
pub use models::{Artwork, SocialPost};
pub use page::{Container, Page};
pub use render::{create_art_card, create_post_card, BatchOutcome, CardRenderer};
pub use utils::{image_url, sanitize_attribute, sanitize_text};
