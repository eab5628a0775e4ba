/*
[INPUT]:  Connection options (endpoint, api key, jurisdiction, format, proxy)
[OUTPUT]: Normalized client configuration with snapshot/merge semantics
[POS]:    Configuration layer - options storage and reset support
[UPDATE]: When adding connection options or changing defaults
*/

use serde::{Deserialize, Serialize};

/// User agent sent with every request. Kept wire-compatible with the
/// historical Open311 wrapper; not configurable.
pub const USER_AGENT: &str = "Open311 Python Wrapper";

/// Response format used when none is configured.
pub const DEFAULT_FORMAT: &str = "xml";

/// Connection options for an Open311 endpoint.
///
/// Every field defaults to the empty string; values are stored as opaque
/// strings and never validated. After normalization `format` is never empty
/// (it falls back to [`DEFAULT_FORMAT`]) and `user_agent` always equals
/// [`USER_AGENT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub format: String,
    pub jurisdiction: String,
    pub proxy: String,
    pub user_agent: String,
}

impl Config {
    /// Start an all-empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key used for posting service requests.
    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = value.into();
        self
    }

    /// Set the base URL of the Open311 endpoint (no trailing slash assumed).
    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = value.into();
        self
    }

    /// Set the response format, normally `"xml"` or `"json"`.
    pub fn format(mut self, value: impl Into<String>) -> Self {
        self.format = value.into();
        self
    }

    /// Set the jurisdiction identifier sent as `jurisdiction_id`.
    pub fn jurisdiction(mut self, value: impl Into<String>) -> Self {
        self.jurisdiction = value.into();
        self
    }

    /// Set the proxy URL handed to the HTTP transport.
    pub fn proxy(mut self, value: impl Into<String>) -> Self {
        self.proxy = value.into();
        self
    }

    /// Merge `patch` over this snapshot and normalize the result.
    ///
    /// Fields absent from the patch fall back to the snapshot value, not to
    /// whatever configuration happens to be active.
    pub(crate) fn merged(&self, patch: &ConfigPatch) -> Config {
        let mut merged = self.clone();
        if let Some(value) = &patch.api_key {
            merged.api_key = value.clone();
        }
        if let Some(value) = &patch.endpoint {
            merged.endpoint = value.clone();
        }
        if let Some(value) = &patch.format {
            merged.format = value.clone();
        }
        if let Some(value) = &patch.jurisdiction {
            merged.jurisdiction = value.clone();
        }
        if let Some(value) = &patch.proxy {
            merged.proxy = value.clone();
        }
        merged.normalize();
        merged
    }

    fn normalize(&mut self) {
        if self.format.is_empty() {
            self.format = DEFAULT_FORMAT.to_string();
        }
        self.user_agent = USER_AGENT.to_string();
    }
}

/// Partial configuration override for [`Open311Client::configure`].
///
/// [`Open311Client::configure`]: crate::Open311Client::configure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub format: Option<String>,
    pub jurisdiction: Option<String>,
    pub proxy: Option<String>,
}

impl ConfigPatch {
    /// Start an empty patch (overrides nothing).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(value.into());
        self
    }

    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into());
        self
    }

    pub fn format(mut self, value: impl Into<String>) -> Self {
        self.format = Some(value.into());
        self
    }

    pub fn jurisdiction(mut self, value: impl Into<String>) -> Self {
        self.jurisdiction = Some(value.into());
        self
    }

    pub fn proxy(mut self, value: impl Into<String>) -> Self {
        self.proxy = Some(value.into());
        self
    }
}
