/*
[INPUT]:  Construction options and configure/reset sequences
[OUTPUT]: Test results for configuration snapshot semantics
[POS]:    Integration tests - configuration holder
[UPDATE]: When configuration options or normalization rules change
*/

use open311::{Config, ConfigPatch, Open311Client, USER_AGENT};
use rstest::rstest;
use tokio_test::assert_ok;

#[test]
fn test_empty_init_defaults() {
    let client = assert_ok!(Open311Client::new(Config::new()));
    let config = client.config();

    assert_eq!(config.api_key, "");
    assert_eq!(config.endpoint, "");
    assert_eq!(config.format, "xml");
    assert_eq!(config.jurisdiction, "");
    assert_eq!(config.proxy, "");
    assert_eq!(config.user_agent, USER_AGENT);
}

#[test]
fn test_init_with_options() {
    let client = assert_ok!(Open311Client::new(
        Config::new()
            .api_key("my_api_key")
            .endpoint("http://test.com"),
    ));

    assert_eq!(client.config().api_key, "my_api_key");
    assert_eq!(client.config().endpoint, "http://test.com");
}

#[rstest]
#[case("", "xml")]
#[case("xml", "xml")]
#[case("json", "json")]
fn test_format_is_never_empty(#[case] supplied: &str, #[case] expected: &str) {
    let client = assert_ok!(Open311Client::new(Config::new().format(supplied)));
    assert_eq!(client.config().format, expected);
}

#[test]
fn test_configure_format_empty_coerces_to_xml() {
    let mut client = assert_ok!(Open311Client::new(Config::new().format("json")));
    client.configure(ConfigPatch::new().format(""));
    assert_eq!(client.config().format, "xml");
}

#[test]
fn test_configure_with_api_key() {
    let mut client = assert_ok!(Open311Client::new(Config::new()));
    assert_eq!(client.config().api_key, "");

    client.configure(ConfigPatch::new().api_key("my_api_key"));
    assert_eq!(client.config().api_key, "my_api_key");
}

#[test]
fn test_configure_with_multiple_options() {
    let mut client = assert_ok!(Open311Client::new(Config::new()));
    assert_eq!(client.config().endpoint, "");
    assert_eq!(client.config().jurisdiction, "");

    let endpoint = "http://api.dc.org/open311/v2_dev";
    client.configure(
        ConfigPatch::new()
            .endpoint(endpoint)
            .jurisdiction("dc.gov"),
    );
    assert_eq!(client.config().endpoint, endpoint);
    assert_eq!(client.config().jurisdiction, "dc.gov");
}

#[test]
fn test_configure_merges_over_snapshot_not_active() {
    let mut client = assert_ok!(Open311Client::new(Config::new().api_key("original")));

    client.configure(ConfigPatch::new().api_key("override"));
    client.configure(ConfigPatch::new().jurisdiction("dc.gov"));

    // The second patch did not mention api_key, so it falls back to the
    // construction snapshot rather than the previous override.
    assert_eq!(client.config().api_key, "original");
    assert_eq!(client.config().jurisdiction, "dc.gov");
}

#[test]
fn test_reset_restores_initial_properties() {
    let mut client = assert_ok!(Open311Client::new(Config::new()));
    client.configure(ConfigPatch::new().api_key("my_api_key"));
    assert_eq!(client.config().api_key, "my_api_key");

    client.reset();
    assert_eq!(client.config().api_key, "");
}

#[test]
fn test_reset_immediately_after_construction_is_noop() {
    let mut client = assert_ok!(Open311Client::new(
        Config::new()
            .api_key("my_api_key")
            .endpoint("http://test.com")
            .format("json")
            .jurisdiction("dc.gov")
            .proxy("http://localhost:3128"),
    ));
    let initial = client.config().clone();

    client.reset();
    assert_eq!(client.config(), &initial);
}

#[test]
fn test_reset_discards_any_configure_sequence() {
    let mut client = assert_ok!(Open311Client::new(
        Config::new().endpoint("http://test.com").format("json"),
    ));
    let initial = client.config().clone();

    client.configure(ConfigPatch::new().endpoint("http://elsewhere.test"));
    client.configure(ConfigPatch::new().format("").api_key("k"));
    client.configure(ConfigPatch::new().jurisdiction("sf.gov"));
    client.reset();

    assert_eq!(client.config(), &initial);
    assert_eq!(client.config().format, "json");
}

#[test]
fn test_user_agent_is_fixed() {
    let client = assert_ok!(Open311Client::new(Config::new()));
    assert_eq!(client.config().user_agent, USER_AGENT);

    let mut client = client;
    client.configure(ConfigPatch::new().format("json"));
    assert_eq!(client.config().user_agent, USER_AGENT);
}
