//! Raw payload types for the Twitter API v2 recent-search endpoint.
//!
//! These mirror the provider's JSON shape: tweets and their authors arrive
//! in separate lists and are joined during normalization. Everything the
//! provider marks optional is optional here too, so deserialization never
//! fails on a sparse response.

use serde::{Deserialize, Serialize};

/// Top-level response from `/tweets/search/recent`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Tweet>>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Pagination metadata. Deserialized for completeness; the service only
/// ever requests a single page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Meta {
    #[serde(default)]
    pub newest_id: Option<String>,
    #[serde(default)]
    pub oldest_id: Option<String>,
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Expanded objects referenced by the tweet list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Includes {
    #[serde(default)]
    pub users: Option<Vec<User>>,
}

/// One account record from `includes.users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// One raw tweet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
    #[serde(default)]
    pub entities: Option<Entities>,
}

/// Engagement counters. Trusted verbatim from the provider; the unsigned
/// types rule out negative counts by construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PublicMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

/// Entity annotations on a tweet body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Option<Vec<HashtagEntity>>,
}

/// One hashtag span. The provider also sends `start`/`end` offsets into the
/// body text; nothing downstream reads them, so only the tag survives
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagEntity {
    pub tag: String,
}

/// Flat, UI-ready record produced by joining a tweet with its author.
///
/// This is the output type of normalization and the unit the HTTP API
/// serves. Missing authors degrade to the `"Unknown User"` / `"@unknown"`
/// sentinels rather than failing the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedTweet {
    pub id: String,
    /// Author display name, or "Unknown User" when the author record is
    /// missing from the response.
    pub username: String,
    /// Author handle with "@" prefix, or "@unknown".
    pub handle: String,
    pub content: String,
    /// Hashtag strings in their order of appearance in the source entities.
    pub hashtags: Vec<String>,
    /// Humanized relative age ("now", "5m", "3h", "2d") or a calendar date.
    pub timestamp: String,
    pub likes: u64,
    pub retweets: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}
