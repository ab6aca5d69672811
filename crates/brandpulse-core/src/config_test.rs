use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_refresh_ordering_completion() {
    assert_eq!(
        parse_refresh_ordering("completion").unwrap(),
        RefreshOrdering::CompletionOrder
    );
}

#[test]
fn parse_refresh_ordering_issue() {
    assert_eq!(
        parse_refresh_ordering("issue").unwrap(),
        RefreshOrdering::IssueOrder
    );
}

#[test]
fn parse_refresh_ordering_unknown_fails() {
    let err = parse_refresh_ordering("latest").unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BRANDPULSE_REFRESH_ORDERING")
    );
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8001");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "brandpulse/0.1 (dashboard)");
    assert_eq!(cfg.refresh_interval_secs, 120);
    assert_eq!(cfg.collection_refresh_delay_ms, 2000);
    assert_eq!(cfg.refresh_ordering, RefreshOrdering::CompletionOrder);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BRANDPULSE_API_BASE_URL", "https://pulse.example.com");
    map.insert("BRANDPULSE_REFRESH_INTERVAL_SECS", "30");
    map.insert("BRANDPULSE_COLLECTION_REFRESH_DELAY_MS", "500");
    map.insert("BRANDPULSE_REFRESH_ORDERING", "issue");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://pulse.example.com");
    assert_eq!(cfg.refresh_interval_secs, 30);
    assert_eq!(cfg.collection_refresh_delay_ms, 500);
    assert_eq!(cfg.refresh_ordering, RefreshOrdering::IssueOrder);
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("BRANDPULSE_API_BASE_URL", "localhost:8001");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_API_BASE_URL"),
        "expected InvalidEnvVar(BRANDPULSE_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_refresh_interval() {
    let mut map = HashMap::new();
    map.insert("BRANDPULSE_REFRESH_INTERVAL_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_REFRESH_INTERVAL_SECS"),
        "expected InvalidEnvVar(BRANDPULSE_REFRESH_INTERVAL_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("BRANDPULSE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BRANDPULSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_collection_delay() {
    let mut map = HashMap::new();
    map.insert("BRANDPULSE_COLLECTION_REFRESH_DELAY_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDPULSE_COLLECTION_REFRESH_DELAY_MS"),
        "expected InvalidEnvVar(BRANDPULSE_COLLECTION_REFRESH_DELAY_MS), got: {result:?}"
    );
}
