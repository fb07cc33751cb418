//! TfL Unified API HTTP client.
//!
//! Provides async methods for the two upstream capabilities the pipeline
//! needs: stop search and journey planning.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::StationId;
use crate::planner::JourneyPlanner;
use crate::stations::StopSearch;

use super::error::TflError;
use super::types::{ItineraryResult, SearchResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Optional application key, sent as the `app_key` query parameter.
    /// TfL serves anonymous requests at a lower rate limit.
    pub app_key: Option<String>,
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config for anonymous access to the production API.
    pub fn new() -> Self {
        Self {
            app_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the application key.
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TfL Unified API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
    app_key: Option<String>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| TflError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            app_key: config.app_key.filter(|k| !k.is_empty()),
        })
    }

    /// Search for stops matching free text.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text stop name, sent as-is
    /// * `mode` - Transport mode to restrict matches to (e.g. "tube")
    /// * `max_results` - Upper bound on returned candidates
    pub async fn search_stop_points(
        &self,
        query: &str,
        mode: &str,
        max_results: u8,
    ) -> Result<SearchResponse, TflError> {
        let url = self.endpoint(&["StopPoint", "Search"])?;
        self.get_json(
            url,
            &[
                ("query", query.to_string()),
                ("modes", mode.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    /// Plan journeys between two resolved stops.
    ///
    /// # Arguments
    ///
    /// * `from` - Origin stop identifier
    /// * `to` - Destination stop identifier
    /// * `modes` - Modes the planner may use (e.g. `["tube", "walking"]`)
    pub async fn journey_results(
        &self,
        from: &StationId,
        to: &StationId,
        modes: &[String],
    ) -> Result<ItineraryResult, TflError> {
        let url = self.endpoint(&[
            "Journey",
            "JourneyResults",
            from.as_str(),
            "to",
            to.as_str(),
        ])?;
        self.get_json(url, &[("mode", modes.join(","))]).await
    }

    /// Build an endpoint URL below the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TflError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, TflError> {
        let mut request = self.http.get(url.clone()).query(query);
        if let Some(key) = &self.app_key {
            request = request.query(&[("app_key", key)]);
        }

        debug!(path = %url.path(), "TfL request");
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}

impl StopSearch for TflClient {
    async fn search_stops(
        &self,
        query: &str,
        mode: &str,
        max_results: u8,
    ) -> Result<SearchResponse, TflError> {
        self.search_stop_points(query, mode, max_results).await
    }
}

impl JourneyPlanner for TflClient {
    async fn plan(
        &self,
        from: &StationId,
        to: &StationId,
        modes: &[String],
    ) -> Result<ItineraryResult, TflError> {
        self.journey_results(from, to, modes).await
    }
}
