/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for open311 tests

use open311::Config;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointed at a mock server with the usual test identifiers
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> Config {
    Config::new()
        .endpoint(server.uri())
        .jurisdiction("dc.gov")
        .api_key("my_api_key")
}
