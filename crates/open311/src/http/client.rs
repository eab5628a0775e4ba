/*
[INPUT]:  Connection options and per-call parameters
[OUTPUT]: Configured client dispatching requests and decoded responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;
use url::form_urlencoded;

use crate::config::{Config, ConfigPatch};

use super::decode;
use super::transport::{HttpTransport, Transport};
use super::Result;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main client for an Open311 endpoint
///
/// Holds the connection options supplied at construction as an immutable
/// snapshot; [`configure`](Open311Client::configure) merges overrides on top
/// of that snapshot and [`reset`](Open311Client::reset) restores it. Each
/// operation issues exactly one HTTP call and decodes the body according to
/// the active format.
#[derive(Debug)]
pub struct Open311Client {
    transport: Box<dyn Transport>,
    original: Config,
    active: Config,
}

impl Open311Client {
    /// Create a client with default HTTP settings.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create a client with custom HTTP settings.
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let active = config.merged(&ConfigPatch::default());
        let transport = HttpTransport::new(&client_config, &active.proxy, &active.user_agent)?;
        Ok(Self {
            transport: Box::new(transport),
            original: config,
            active,
        })
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        let active = config.merged(&ConfigPatch::default());
        Self {
            transport: Box::new(transport),
            original: config,
            active,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &Config {
        &self.active
    }

    /// Merge `patch` over the construction-time options and activate the
    /// result.
    ///
    /// Fields not set in the patch fall back to the construction snapshot,
    /// not to the currently active value, so successive calls do not
    /// accumulate.
    pub fn configure(&mut self, patch: ConfigPatch) {
        self.active = self.original.merged(&patch);
    }

    /// Restore the configuration captured at construction time.
    pub fn reset(&mut self) {
        self.configure(ConfigPatch::default());
    }

    pub(crate) fn format(&self) -> &str {
        &self.active.format
    }

    /// Dispatch a GET and decode the body per the active format.
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.build_url(path, params, false)?;
        debug!(url = %url, "dispatching GET");
        let body = self.transport.get(url).await?;
        decode::decode_body(&self.active.format, &body)
    }

    /// Dispatch a POST with a form-encoded body and decode the response per
    /// the active format.
    pub(crate) async fn post(&self, path: &str, fields: &[(&str, &str)]) -> Result<Value> {
        let url = self.build_url(path, &[], true)?;
        let body = encode_form(fields);
        debug!(url = %url, "dispatching POST");
        let body = self.transport.post(url, body).await?;
        decode::decode_body(&self.active.format, &body)
    }

    /// Build `endpoint/path` with `jurisdiction_id` always present,
    /// `api_key` appended for POST calls, and any extra pairs
    /// percent-encoded after them.
    fn build_url(&self, path: &str, params: &[(&str, &str)], with_api_key: bool) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.active.endpoint, path))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("jurisdiction_id", &self.active.jurisdiction);
            if with_api_key {
                pairs.append_pair("api_key", &self.active.api_key);
            }
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
