//! Response normalization for Twitter search results.
//!
//! The provider returns tweets and authors as separate lists joined by
//! `author_id`. This module flattens that relational shape into
//! [`ProcessedTweet`] records and humanizes absolute timestamps into
//! relative-age strings.

use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;

use super::types::{ProcessedTweet, SearchResponse, User};

/// Display name used when a tweet's author is missing from the response.
const UNKNOWN_NAME: &str = "Unknown User";
/// Handle used when a tweet's author is missing from the response.
const UNKNOWN_HANDLE: &str = "unknown";

/// Joins raw search results with their embedded author records and returns
/// flat, UI-ready tweet records in the same order as the input.
///
/// This never fails: a response without a tweet list yields an empty vector,
/// and a tweet whose author is absent from `includes.users` degrades to the
/// "Unknown User" / "@unknown" sentinels. Relative ages are computed against
/// a single "now" captured at call time.
pub fn normalize(raw: &SearchResponse) -> Vec<ProcessedTweet> {
    normalize_at(raw, Utc::now())
}

pub(crate) fn normalize_at(raw: &SearchResponse, now: DateTime<Utc>) -> Vec<ProcessedTweet> {
    let tweets = match &raw.data {
        Some(tweets) => tweets,
        None => return Vec::new(),
    };

    // Author lookup keyed by user id. Tweets reference authors by id only.
    let users: HashMap<&str, &User> = raw
        .includes
        .as_ref()
        .and_then(|inc| inc.users.as_ref())
        .map(|users| users.iter().map(|u| (u.id.as_str(), u)).collect())
        .unwrap_or_default();

    debug!(
        "Normalizing {} tweets with {} embedded users",
        tweets.len(),
        users.len()
    );

    tweets
        .iter()
        .map(|tweet| {
            let author = tweet
                .author_id
                .as_deref()
                .and_then(|id| users.get(id).copied());

            let hashtags = tweet
                .entities
                .as_ref()
                .and_then(|e| e.hashtags.as_ref())
                .map(|tags| tags.iter().map(|h| h.tag.clone()).collect())
                .unwrap_or_default();

            let metrics = tweet.public_metrics.clone().unwrap_or_default();

            ProcessedTweet {
                id: tweet.id.clone(),
                username: author
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                handle: format!(
                    "@{}",
                    author.map(|u| u.username.as_str()).unwrap_or(UNKNOWN_HANDLE)
                ),
                content: tweet.text.clone(),
                hashtags,
                timestamp: humanize_created_at(tweet.created_at.as_deref(), now),
                likes: metrics.like_count,
                retweets: metrics.retweet_count,
                profile_image: author.and_then(|u| u.profile_image_url.clone()),
            }
        })
        .collect()
}

/// Parses the provider's RFC 3339 creation instant and humanizes it. A
/// missing or unparseable timestamp degrades to "now" rather than failing
/// the normalization.
fn humanize_created_at(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    created_at
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| humanize_age(dt.with_timezone(&Utc), now))
        .unwrap_or_else(|| "now".to_string())
}

/// Converts an absolute creation instant into a relative-age string.
///
/// Whole minutes under 1 render as "now", under an hour as "{m}m", whole
/// hours under a day as "{h}h", whole days under a week as "{d}d", anything
/// older as a calendar date. Differences truncate toward zero, so a post
/// timestamped slightly in the future (clock skew) also lands in the "now"
/// branch instead of producing a negative count.
pub fn humanize_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(created);
    let minutes = diff.num_minutes();

    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = diff.num_days();
    if days < 7 {
        return format!("{}d", days);
    }

    created.format("%-m/%-d/%Y").to_string()
}
