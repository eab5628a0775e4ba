/*
[INPUT]:  Token identifiers issued by the endpoint
[OUTPUT]: The service request data the token resolves to
[POS]:    HTTP layer - token resolution endpoint
[UPDATE]: When token resolution or response extraction changes
*/

use std::fmt::Display;

use serde_json::Value;

use super::client::Open311Client;
use super::decode;
use super::Result;

impl Open311Client {
    /// Resolve a token to the service request it was issued for.
    ///
    /// GET /tokens/{token}.{format}?jurisdiction_id={jurisdiction}
    ///
    /// Some endpoints hand back a token instead of an immediate request id;
    /// this exchanges it. Returns the sub-structure at
    /// `service_requests.request`.
    pub async fn request_id_from_token(&self, token: impl Display) -> Result<Value> {
        let path = format!("tokens/{}.{}", token, self.format());
        let data = self.get(&path, &[]).await?;
        decode::extract(data, &["service_requests", "request"])
    }
}
