//! Configuration module for the tagfeed service.
//!
//! This module contains configuration structures and environment variable
//! handling for the Twitter/X API integration.

use log::{debug, error, info, warn};
use std::env;

use crate::error::SearchError;

/// Configuration struct for Twitter/X API credentials.
///
/// Holds the single credential required to authenticate with the Twitter/X
/// API v2 search endpoints: an app-only bearer token.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// The bearer token for app-only authentication (all read operations)
    pub bearer_token: String,
}

impl TwitterConfig {
    /// Creates a new `TwitterConfig` by loading credentials from environment
    /// variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `TWITTER_BEARER_TOKEN`: Twitter API bearer token
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the required environment variable is present
    /// - `Err(SearchError::Configuration)`: If it is missing or empty
    ///
    /// Every operation that talks to the provider loads its configuration
    /// through this function first, so a missing credential fails fast with
    /// a configuration error before any network call is attempted.
    pub fn from_env() -> Result<Self, SearchError> {
        match env::var("TWITTER_BEARER_TOKEN") {
            Ok(token) if !token.is_empty() => {
                info!(
                    "Found TWITTER_BEARER_TOKEN environment variable with length: {}",
                    token.len()
                );
                debug!("Bearer token (masked): {}", mask_token(&token));

                if token.len() < 10 {
                    warn!(
                        "Bearer token seems unusually short ({} characters)",
                        token.len()
                    );
                }

                Ok(TwitterConfig {
                    bearer_token: token,
                })
            }
            Ok(_) => {
                error!("TWITTER_BEARER_TOKEN is set but empty");
                Err(SearchError::Configuration(
                    "Twitter API Bearer Token is not configured. Please set TWITTER_BEARER_TOKEN environment variable.".to_string(),
                ))
            }
            Err(_) => {
                error!("Failed to load TWITTER_BEARER_TOKEN from environment");
                Err(SearchError::Configuration(
                    "Twitter API Bearer Token is not configured. Please set TWITTER_BEARER_TOKEN environment variable.".to_string(),
                ))
            }
        }
    }
}

/// Masks a token for safe logging, keeping at most the first and last eight
/// characters visible.
fn mask_token(token: &str) -> String {
    let len = token.len();
    if len > 16 {
        format!("{}...{}", &token[..8], &token[len - 8..])
    } else if len > 8 {
        format!("{}...", &token[..8])
    } else {
        format!("{}...", token)
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a
/// u16. If the environment variable is not set or cannot be parsed, it
/// defaults to 3000.
///
/// # Panics
///
/// This function will panic if the `PORT` environment variable is set to a
/// value that cannot be parsed as a valid port number.
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
