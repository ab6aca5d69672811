use crate::app_config::{AppConfig, RefreshOrdering};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config
/// pointed at a local backend.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = or_default("BRANDPULSE_API_BASE_URL", "http://localhost:8001");
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_API_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base_url}'"),
        });
    }

    let log_level = or_default("BRANDPULSE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("BRANDPULSE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BRANDPULSE_USER_AGENT", "brandpulse/0.1 (dashboard)");

    let refresh_interval_secs = parse_u64("BRANDPULSE_REFRESH_INTERVAL_SECS", "120")?;
    if refresh_interval_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_REFRESH_INTERVAL_SECS".to_string(),
            reason: "refresh interval must be greater than zero".to_string(),
        });
    }

    let collection_refresh_delay_ms = parse_u64("BRANDPULSE_COLLECTION_REFRESH_DELAY_MS", "2000")?;
    let refresh_ordering =
        parse_refresh_ordering(&or_default("BRANDPULSE_REFRESH_ORDERING", "completion"))?;

    Ok(AppConfig {
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        refresh_interval_secs,
        collection_refresh_delay_ms,
        refresh_ordering,
    })
}

/// Parse a string into a `RefreshOrdering` variant.
fn parse_refresh_ordering(s: &str) -> Result<RefreshOrdering, ConfigError> {
    match s {
        "completion" => Ok(RefreshOrdering::CompletionOrder),
        "issue" => Ok(RefreshOrdering::IssueOrder),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_REFRESH_ORDERING".to_string(),
            reason: format!("unknown ordering '{other}'; expected 'completion' or 'issue'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
