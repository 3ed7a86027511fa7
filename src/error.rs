//! Error taxonomy for the hashtag search service.
//!
//! Every provider-touching operation returns a [`SearchError`]. The three
//! variants map directly onto how the fallback engine treats a failure:
//! configuration problems are checked once before any variant loop runs,
//! while transport and provider failures are absorbed per variant and only
//! become fatal on the last one.

use thiserror::Error;

/// Failures that can occur while searching tweets.
///
/// Note that zero results is *not* an error: an empty result set is a valid
/// terminal state and is represented by
/// [`FallbackOutcome`](crate::twitter::FallbackOutcome) with no query marker.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required credential or setting is missing. Raised before any
    /// network call is attempted.
    #[error("{0}")]
    Configuration(String),

    /// Network-level failure: the request never produced an HTTP response,
    /// or the response body could not be read.
    #[error("request to Twitter API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx HTTP status.
    #[error("Twitter API error: {status} {status_text}")]
    Provider { status: u16, status_text: String },
}

impl SearchError {
    /// The provider's HTTP status code, if this failure carries one.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            SearchError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}
