/*
[INPUT]:  Fully formed request URLs and URL-encoded POST bodies
[OUTPUT]: Raw response bodies from the wire
[POS]:    HTTP layer - transport seam behind the dispatcher
[UPDATE]: When changing transport capabilities or reqwest wiring
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Proxy};
use url::Url;

use super::{ClientConfig, Result};

/// Transport capability consumed by the dispatcher.
///
/// The dispatcher supplies fully formed URLs (query parameters included) and,
/// for POST, a URL-encoded body. Tests substitute this trait instead of
/// subclassing the client.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Perform a blocking GET and return the full response body.
    async fn get(&self, url: Url) -> Result<String>;

    /// Perform a blocking POST with a form-encoded body and return the full
    /// response body.
    async fn post(&self, url: Url, body: String) -> Result<String>;
}

/// Default transport over a configured reqwest client
#[derive(Debug)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build the transport from timeouts, an optional proxy URL (empty string
    /// means no proxy) and the user agent to send.
    pub fn new(config: &ClientConfig, proxy: &str, user_agent: &str) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(user_agent);
        if !proxy.is_empty() {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn post(&self, url: Url, body: String) -> Result<String> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
