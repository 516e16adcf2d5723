//! API client for the admission backend.
//!
//! This module provides the `ApiClient` struct for the three read-only
//! endpoints the lookup page consumes.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{AdmissionInfo, AdmissionInfoResponse, SearchResult, Stats};

use super::{AdmissionApi, ApiError};

// ============================================================================
// Constants
// ============================================================================

const INFO_PATH: &str = "/api/admission/info";
const STATS_PATH: &str = "/api/admission/stats";
const SEARCH_PATH: &str = "/api/admission/search";

/// API client for the admission backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The roll number is appended as typed, without percent-encoding.
    pub fn search_url(&self, roll_number: &str) -> String {
        format!("{}?roll={}", self.endpoint(SEARCH_PATH), roll_number)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        debug!(url = url, bytes = text.len(), "Response received");

        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Data Fetching Methods =====

    /// Fetch fee-structure metadata, unwrapped from its response envelope
    pub async fn fetch_admission_info(&self) -> Result<AdmissionInfo> {
        let response: AdmissionInfoResponse = self.get(&self.endpoint(INFO_PATH)).await?;
        Ok(response.admission_info)
    }

    /// Fetch selected-student counts
    pub async fn fetch_stats(&self) -> Result<Stats> {
        self.get(&self.endpoint(STATS_PATH)).await
    }

    /// Look up the admission result for a roll number
    pub async fn search_roll(&self, roll_number: &str) -> Result<SearchResult> {
        self.get(&self.search_url(roll_number)).await
    }
}

impl AdmissionApi for ApiClient {
    async fn admission_info(&self) -> Result<AdmissionInfo> {
        self.fetch_admission_info().await
    }

    async fn stats(&self) -> Result<Stats> {
        self.fetch_stats().await
    }

    async fn search(&self, roll_number: &str) -> Result<SearchResult> {
        self.search_roll(roll_number).await
    }
}
