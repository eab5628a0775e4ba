/*
[INPUT]:  Request identifiers, search filters and new-request fields
[OUTPUT]: Service request data (search results, single requests, post receipts)
[POS]:    HTTP layer - service request endpoints
[UPDATE]: When adding request endpoints or changing query handling
[UPDATE]: 2026-08-05 Added POST body encoding and tests
*/

use std::fmt::Display;

use serde_json::Value;

use super::client::Open311Client;
use super::decode;
use super::Result;

impl Open311Client {
    /// Search service requests with optional filter parameters.
    ///
    /// GET /requests.{format}?jurisdiction_id={jurisdiction}&{filters}
    ///
    /// Each supplied pair is forwarded as an extra query parameter. Returns
    /// the sub-structure at `service_requests.request`.
    pub async fn service_requests(&self, filters: &[(&str, &str)]) -> Result<Value> {
        let path = format!("requests.{}", self.format());
        let data = self.get(&path, filters).await?;
        decode::extract(data, &["service_requests", "request"])
    }

    /// Return a single service request by id.
    ///
    /// GET /requests/{request_id}.{format}?jurisdiction_id={jurisdiction}
    ///
    /// Returns the full decoded tree.
    pub async fn get_service_request(&self, request_id: impl Display) -> Result<Value> {
        let path = format!("requests/{}.{}", request_id, self.format());
        self.get(&path, &[]).await
    }

    /// Submit a new service request.
    ///
    /// POST /requests.{format}?jurisdiction_id={jurisdiction}&api_key={api_key}
    ///
    /// The supplied pairs are sent URL-encoded as the request body. Returns
    /// the full decoded tree.
    pub async fn post_service_request(&self, fields: &[(&str, &str)]) -> Result<Value> {
        let path = format!("requests.{}", self.format());
        self.post(&path, fields).await
    }
}
