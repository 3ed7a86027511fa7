//! Query fallback engine for hashtag search.
//!
//! The recent-search endpoint often returns zero results for one query
//! formulation while a slightly different one matches, and every request
//! burns rate-limit quota. The engine tries a fixed, ordered list of query
//! variants one at a time and stops at the first that yields tweets.

use async_trait::async_trait;
use log::{info, warn};

use crate::error::SearchError;

use super::types::ProcessedTweet;

/// The search operation the fallback engine drives. Implemented by
/// [`TwitterClient`](super::TwitterClient); tests substitute a scripted
/// backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs one search query and returns normalized tweets.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<ProcessedTweet>, SearchError>;
}

/// Result of a fallback search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOutcome {
    /// The tweets from the first variant that matched, or empty.
    pub tweets: Vec<ProcessedTweet>,
    /// The query variant that produced the tweets. `None` means every
    /// variant completed without matching anything — a valid outcome,
    /// distinct from failure.
    pub query_used: Option<String>,
}

/// Builds the ordered list of query variants to attempt for a hashtag.
///
/// Earlier entries are strictly preferred; the engine never merges results
/// across variants. The caller guarantees `hashtag` is non-empty — an empty
/// tag would simply produce malformed filter terms for the provider.
pub fn build_query_plan(hashtag: &str) -> Vec<String> {
    vec![
        format!("#{hashtag} -is:retweet"),
        format!("#{hashtag}"),
        format!("{hashtag} -is:retweet"),
        format!("#{hashtag} -is:retweet lang:ja"),
        format!("#{hashtag} -is:retweet lang:en"),
    ]
}

/// Searches for tweets matching a hashtag, trying query variants in order
/// until one yields results.
///
/// Variants are attempted strictly sequentially — concurrent attempts would
/// burn quota without improving latency to the first hit. A variant that
/// fails (transport or provider error) is logged and skipped, with no retry
/// of that variant; moving on to the next variant is the retry mechanism.
/// The first variant returning one or more tweets short-circuits the loop.
///
/// If every variant completes with zero results, the outcome is an empty
/// tweet list with no `query_used` marker — absence of matching content is
/// not an error. If every variant fails without a single successful call,
/// the last error propagates instead, so a transport outage is never
/// silently reported as "no tweets".
pub async fn search_with_fallback<B>(
    backend: &B,
    hashtag: &str,
    max_results: u32,
) -> Result<FallbackOutcome, SearchError>
where
    B: SearchBackend + ?Sized,
{
    let plan = build_query_plan(hashtag);
    info!(
        "Trying {} query variations for hashtag: {}",
        plan.len(),
        hashtag
    );

    let mut any_succeeded = false;
    let mut last_error: Option<SearchError> = None;

    for query in plan {
        info!("Searching for tweets with query: {}", query);
        match backend.search(&query, max_results).await {
            Ok(tweets) if !tweets.is_empty() => {
                info!(
                    "Query '{}' matched {} tweets, stopping fallback",
                    query,
                    tweets.len()
                );
                return Ok(FallbackOutcome {
                    tweets,
                    query_used: Some(query),
                });
            }
            Ok(_) => {
                info!("Query '{}' returned no tweets, trying next variant", query);
                any_succeeded = true;
            }
            Err(e) => {
                warn!("Query '{}' failed: {}", query, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if !any_succeeded => Err(e),
        _ => {
            info!("No tweets found with any query variation for: {}", hashtag);
            Ok(FallbackOutcome {
                tweets: Vec::new(),
                query_used: None,
            })
        }
    }
}
