//! # Tagfeed Library
//!
//! A Rust web service library backing a hashtag tweet browser. It wraps the
//! Twitter/X API v2 recent-search endpoint with a multi-query fallback
//! strategy, normalizes the provider's relational response into flat
//! UI-ready records, and reports rate-limit quota.
//!
//! ## Features
//!
//! - Query fallback engine: ordered query variants tried until one matches
//! - Response normalization: tweet/author join, hashtag extraction,
//!   humanized relative ages
//! - Rate-limit introspection from `x-rate-limit-*` response headers
//! - HTTP API (`/api/tweets`, `/api/tweets/{id}`, `/api/rate-limit`,
//!   `/health`)
//!
//! ## Configuration
//!
//! - `TWITTER_BEARER_TOKEN`: Twitter API bearer token (required for all
//!   provider-touching endpoints)
//! - `PORT`: Server port (defaults to 3000)

pub mod config;
pub mod error;
pub mod handlers;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{get_server_port, TwitterConfig};
pub use error::SearchError;
pub use handlers::{
    handle_health, handle_rate_limit, handle_root, handle_tweet_lookup, handle_tweets,
};
pub use twitter::{
    build_query_plan, inspect, normalize, search_with_fallback, FallbackOutcome, ProcessedTweet,
    QuotaStatus, SearchBackend, TwitterClient,
};
