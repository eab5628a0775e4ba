/*
[INPUT]:  Service identifiers and the configured jurisdiction
[OUTPUT]: Service catalog data (service list, service definitions)
[POS]:    HTTP layer - service discovery endpoints
[UPDATE]: When adding service endpoints or changing response extraction
*/

use std::fmt::Display;

use serde_json::Value;

use super::client::Open311Client;
use super::decode;
use super::Result;

impl Open311Client {
    /// Return the service list for the configured endpoint.
    ///
    /// GET /services.{format}?jurisdiction_id={jurisdiction}
    ///
    /// Returns the sub-structure at `services.service`: an array of service
    /// mappings, or a single mapping when the endpoint lists exactly one
    /// service.
    pub async fn service_list(&self) -> Result<Value> {
        let path = format!("services.{}", self.format());
        let data = self.get(&path, &[]).await?;
        decode::extract(data, &["services", "service"])
    }

    /// Return the service definition for a specific service code.
    ///
    /// GET /service/{service_code}.{format}?jurisdiction_id={jurisdiction}
    ///
    /// Integer codes and their decimal-string forms produce identical
    /// request URLs. Returns the full decoded tree.
    pub async fn service_definition(&self, service_code: impl Display) -> Result<Value> {
        let path = format!("service/{}.{}", service_code, self.format());
        self.get(&path, &[]).await
    }
}
