//! HTTP facade over the Twitter API v2 search endpoints.
//!
//! One thin client owns the base URL, the bearer credential and the fixed
//! field-expansion parameters; everything above it works with normalized
//! tweets and never sees provider JSON.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, Response};

use crate::error::SearchError;

use super::fallback::SearchBackend;
use super::normalize::normalize;
use super::rate_limit::{inspect, QuotaStatus};
use super::types::{ProcessedTweet, SearchResponse};

/// Production base URL for the Twitter API v2.
pub const TWITTER_API_BASE: &str = "https://api.twitter.com/2";

/// Field expansions requested on every tweet fetch: author cross-reference,
/// creation time, engagement metrics, hashtag entities, and the author's
/// display name, handle and avatar.
const TWEET_EXPANSIONS: &str =
    "expansions=author_id&tweet.fields=created_at,public_metrics,entities&user.fields=name,username,profile_image_url";

/// Client for the Twitter API v2 recent-search endpoint family.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    bearer_token: String,
    base_url: String,
}

impl TwitterClient {
    /// Creates a client against the production API.
    pub fn new(bearer_token: String) -> Self {
        Self::with_base_url(bearer_token, TWITTER_API_BASE)
    }

    /// Creates a client against an alternate base URL. Used by tests to
    /// point at a mock server.
    pub fn with_base_url(bearer_token: String, base_url: impl Into<String>) -> Self {
        TwitterClient {
            http: Client::new(),
            bearer_token,
            base_url: base_url.into(),
        }
    }

    /// Issues one authenticated GET against the provider.
    ///
    /// A send failure surfaces as [`SearchError::Transport`]; status checks
    /// are left to the caller because the rate-limit probe reads headers off
    /// non-2xx responses too.
    async fn get(&self, path_and_query: &str) -> Result<Response, SearchError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("Request URL: {}", url);
        debug!("Request headers: Authorization: Bearer [REDACTED]");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        debug!("Received response with status: {}", response.status());
        Ok(response)
    }

    fn provider_error(response: &Response) -> SearchError {
        let status = response.status();
        SearchError::Provider {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// Searches recent tweets for one query string and returns normalized
    /// results.
    ///
    /// `max_results` is passed through to the provider unvalidated; the
    /// endpoint enforces its own 10..=100 ceiling and an out-of-range value
    /// surfaces as a provider error.
    pub async fn search_tweets(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<ProcessedTweet>, SearchError> {
        let path = format!(
            "/tweets/search/recent?query={}&max_results={}&{}",
            urlencoding::encode(query),
            max_results,
            TWEET_EXPANSIONS
        );

        let response = self.get(&path).await?;
        if !response.status().is_success() {
            error!(
                "Search for query '{}' failed with status {}",
                query,
                response.status()
            );
            return Err(Self::provider_error(&response));
        }

        let raw: SearchResponse = response.json().await?;
        let tweets = normalize(&raw);
        info!("Query '{}' returned {} tweets", query, tweets.len());
        Ok(tweets)
    }

    /// Looks up a single tweet by id with the same field expansions as the
    /// search endpoint, returning the provider's raw payload.
    pub async fn lookup_tweet(&self, id: &str) -> Result<serde_json::Value, SearchError> {
        info!("Fetching specific tweet ID: {}", id);
        let path = format!(
            "/tweets/{}?{}",
            urlencoding::encode(id),
            TWEET_EXPANSIONS
        );

        let response = self.get(&path).await?;
        if !response.status().is_success() {
            error!(
                "Tweet lookup for '{}' failed with status {}",
                id,
                response.status()
            );
            return Err(Self::provider_error(&response));
        }

        Ok(response.json().await?)
    }

    /// Checks the current rate-limit quota by issuing a lightweight search
    /// and reading the quota headers off the response.
    ///
    /// The headers are present on throttled (429) responses as well, so the
    /// probe reports quota regardless of the response status and returns
    /// that status alongside.
    pub async fn rate_limit_probe(&self) -> Result<(QuotaStatus, u16), SearchError> {
        let response = self
            .get("/tweets/search/recent?query=test&max_results=10")
            .await?;
        let status = response.status().as_u16();
        let quota = inspect(response.headers());
        info!(
            "Rate limit probe: status {}, {}/{} remaining, limited: {}",
            status, quota.remaining, quota.limit, quota.is_limited
        );
        Ok((quota, status))
    }
}

#[async_trait]
impl SearchBackend for TwitterClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<ProcessedTweet>, SearchError> {
        self.search_tweets(query, max_results).await
    }
}
