/*
[INPUT]:  Error sources (HTTP, URL building, XML/JSON decoding)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Open311 client
#[derive(Error, Debug)]
pub enum Open311Error {
    /// HTTP request failed (connection errors and non-2xx statuses)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint and path did not form a valid URL
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body was not valid JSON
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body was not valid XML
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Response was structurally unusable (no root element, truncated tree)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Decoded response lacked an expected top-level key
    #[error("Response missing expected key '{0}'")]
    MissingKey(String),
}

impl Open311Error {
    /// Check if the error came from the HTTP transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Open311Error::Http(_))
    }

    /// Check if the error came from decoding the response body
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Open311Error::Json(_) | Open311Error::Xml(_) | Open311Error::InvalidResponse(_)
        )
    }

    /// Check if the decoded response had an unexpected shape
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Open311Error::MissingKey(_))
    }
}

/// Result type alias for Open311 operations
pub type Result<T> = std::result::Result<T, Open311Error>;
