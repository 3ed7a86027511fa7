//! Twitter/X API integration module.
//!
//! This module contains the query-fallback search core: raw payload types,
//! response normalization, the fallback engine, rate-limit introspection and
//! the HTTP client facade that ties them to the provider.

mod client;
mod fallback;
mod normalize;
mod rate_limit;
mod types;

// Re-export public API
pub use client::{TwitterClient, TWITTER_API_BASE};
pub use fallback::{build_query_plan, search_with_fallback, FallbackOutcome, SearchBackend};
pub use normalize::{humanize_age, normalize};
pub use rate_limit::{inspect, QuotaStatus};
pub use types::{
    Entities, HashtagEntity, Includes, Meta, ProcessedTweet, PublicMetrics, SearchResponse, Tweet,
    User,
};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use normalize::normalize_at;
#[allow(unused_imports)]
pub(crate) use rate_limit::inspect_at;
