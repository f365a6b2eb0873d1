//! Error types for fetching, record validation and page output

use thiserror::Error;

/// Failure of a single outbound fetch.
///
/// Fetchers never return this past their own boundary; it exists so the
/// transport can say what went wrong before the fetcher logs it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A remote record that cannot be turned into a renderable one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` should be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize page")]
    Serialize(#[from] std::io::Error),

    #[error("serialized page is not UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
