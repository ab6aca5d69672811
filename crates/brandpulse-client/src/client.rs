//! HTTP client for the sentiment backend.
//!
//! Wraps `reqwest` with the three calls the dashboard makes: fetch the
//! current snapshot, fetch the brand catalog, and ask the backend to run a
//! collection pass. Non-2xx statuses surface as
//! [`ClientError::UnexpectedStatus`] and undecodable bodies as
//! [`ClientError::Deserialize`], so a malformed response never reaches the
//! caller as partial data.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use brandpulse_core::{AppConfig, BrandCatalog, BrandsResponse, DashboardSnapshot};

use crate::error::ClientError;

const DASHBOARD_PATH: &str = "api/dashboard";
const BRANDS_PATH: &str = "api/brands";
const COLLECT_PATH: &str = "api/collect-data";

/// Client for the sentiment backend's REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`DashboardClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the current dashboard snapshot (`GET /api/dashboard`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a valid snapshot.
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ClientError> {
        let url = self.endpoint(DASHBOARD_PATH)?;
        self.get_json(url, "dashboard").await
    }

    /// Fetches the brand catalog (`GET /api/brands`).
    ///
    /// # Errors
    ///
    /// Same as [`DashboardClient::fetch_dashboard`].
    pub async fn fetch_brands(&self) -> Result<BrandCatalog, ClientError> {
        let url = self.endpoint(BRANDS_PATH)?;
        let envelope: BrandsResponse = self.get_json(url, "brands").await?;
        Ok(envelope.brands)
    }

    /// Asks the backend to run a collection pass (`POST /api/collect-data`).
    ///
    /// The response body is drained and discarded; only the status matters.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    pub async fn trigger_collection(&self) -> Result<(), ClientError> {
        let url = self.endpoint(COLLECT_PATH)?;
        let response = self.client.post(url.clone()).send().await?;
        Self::check_status(&response, &url)?;
        let _ = response.bytes().await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = self.client.get(url.clone()).send().await?;
        Self::check_status(&response, &url)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    fn check_status(response: &reqwest::Response, url: &Url) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(status = status.as_u16(), %url, "backend returned non-2xx");
            Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
