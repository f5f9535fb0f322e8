//! Tests for the client module

use super::*;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = RestClientConfig::default();
    assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.page_limit, 20);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("poketab/"));
}

#[test]
fn test_config_builder() {
    let config = RestClientConfig::builder()
        .base_url("https://catalog.example.com/v2/")
        .timeout(Duration::from_secs(5))
        .page_limit(50)
        .header("X-Test", "1")
        .user_agent("test-agent")
        .build();

    assert_eq!(config.base_url, "https://catalog.example.com/v2/");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.page_limit, 50);
    assert_eq!(config.default_headers.get("X-Test"), Some(&"1".to_string()));
    assert_eq!(config.user_agent, "test-agent");
}

#[test]
fn test_url_building_strips_extra_slashes() {
    let client = RestClient::with_config(
        RestClientConfig::builder()
            .base_url("https://catalog.example.com/v2/")
            .build(),
    );

    assert_eq!(
        client.collection_url("/stat/"),
        "https://catalog.example.com/v2/stat/"
    );
    assert_eq!(
        client.record_url("stat", "hp"),
        "https://catalog.example.com/v2/stat/hp/"
    );
    assert_eq!(
        client.record_url("stat", "1"),
        "https://catalog.example.com/v2/stat/1/"
    );
}
