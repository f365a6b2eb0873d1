//! Outbound fetchers for the artwork and social APIs
//!
//! Both fetchers absorb every failure: they log it and hand back an empty
//! list, so callers never see a fetch error.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::FetchError;
use crate::models::ArtworkEnvelope;

/// Source of response bodies for a URL
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the body of a successful response
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Transport`] backed by a shared `reqwest` client
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_error)
    }
}

/// Fetch the artwork listing and return its `data` array.
/// Returns an empty list on any failure.
pub async fn fetch_art_data<T: Transport + ?Sized>(transport: &T, url: &str) -> Vec<Value> {
    match try_fetch_art_data(transport, url).await {
        Ok(records) => {
            debug!(url, count = records.len(), "fetched art data");
            records
        }
        Err(e) => {
            error!("Error fetching art data: {e}");
            Vec::new()
        }
    }
}

/// Fetch the posts listing, whose body is a bare JSON array.
/// Returns an empty list on any failure.
pub async fn fetch_social_data<T: Transport + ?Sized>(transport: &T, url: &str) -> Vec<Value> {
    match try_fetch_social_data(transport, url).await {
        Ok(records) => {
            debug!(url, count = records.len(), "fetched social media data");
            records
        }
        Err(e) => {
            error!("Error fetching social media data: {e}");
            Vec::new()
        }
    }
}

async fn try_fetch_art_data<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<Vec<Value>, FetchError> {
    let body = transport.get_text(url).await?;
    let envelope: ArtworkEnvelope = decode(url, &body)?;
    Ok(envelope.data)
}

async fn try_fetch_social_data<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<Vec<Value>, FetchError> {
    let body = transport.get_text(url).await?;
    decode(url, &body)
}

fn decode<D: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<D, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
