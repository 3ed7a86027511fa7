//! HTTP route handlers for the tagfeed service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests and return appropriate responses. Handlers load the
//! bearer credential per request so a missing credential fails fast with a
//! configuration error before any provider call is made.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::TwitterConfig;
use crate::error::SearchError;
use crate::twitter::{search_with_fallback, TwitterClient};

/// Query parameters accepted by the `/api/tweets` endpoint.
#[derive(Debug, Deserialize)]
pub struct TweetsParams {
    /// The hashtag to search for, without the leading `#`.
    pub hashtag: Option<String>,
    /// Result cap forwarded to the provider. Defaults to 20.
    pub max_results: Option<u32>,
}

type HandlerError = (StatusCode, Json<Value>);

fn server_error(message: &str, details: &SearchError) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": message, "details": details.to_string()})),
    )
}

/// Loads the Twitter client for a request, mapping a missing credential to
/// a 500 with a human-readable message.
fn client_from_env() -> Result<TwitterClient, HandlerError> {
    match TwitterConfig::from_env() {
        Ok(config) => Ok(TwitterClient::new(config.bearer_token)),
        Err(e) => {
            error!("Twitter client unavailable: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            ))
        }
    }
}

/// Handles GET requests to the `/api/tweets` endpoint.
///
/// Searches recent tweets for a hashtag using the query fallback engine.
///
/// # Responses
///
/// - `200` with `{"tweets": [...], "query_used": "..."}` when a variant
///   matched
/// - `200` with `{"tweets": [], "message": "..."}` when every variant
///   completed without results (valid-empty, not an error)
/// - `400` when the `hashtag` parameter is missing or blank
/// - `500` when the bearer token is not configured or every variant failed
pub async fn handle_tweets(
    Query(params): Query<TweetsParams>,
) -> Result<Json<Value>, HandlerError> {
    let hashtag = match params
        .hashtag
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
    {
        Some(h) => h.to_string(),
        None => {
            info!("Missing hashtag parameter");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Hashtag parameter is required"})),
            ));
        }
    };
    let max_results = params.max_results.unwrap_or(20);

    info!(
        "Received tweet search request: hashtag={}, max_results={}",
        hashtag, max_results
    );

    let client = client_from_env()?;

    match search_with_fallback(&client, &hashtag, max_results).await {
        Ok(outcome) => match outcome.query_used {
            Some(query) => {
                info!("Successfully fetched tweets with query: {}", query);
                Ok(Json(json!({"tweets": outcome.tweets, "query_used": query})))
            }
            None => Ok(Json(
                json!({"tweets": [], "message": "No tweets found for this hashtag"}),
            )),
        },
        Err(e) => {
            error!("Error fetching tweets: {}", e);
            Err(server_error("Failed to fetch tweets from Twitter API", &e))
        }
    }
}

/// Handles GET requests to the `/api/tweets/{id}` endpoint.
///
/// Looks up a single tweet by id and returns the provider's raw payload.
/// Provider failures pass the provider's status code through.
pub async fn handle_tweet_lookup(Path(id): Path<String>) -> Result<Json<Value>, HandlerError> {
    let client = client_from_env()?;

    match client.lookup_tweet(&id).await {
        Ok(tweet) => Ok(Json(
            json!({"success": true, "tweet": tweet, "tweet_id": id}),
        )),
        Err(e) => {
            error!("Error fetching tweet {}: {}", id, e);
            let status = e
                .provider_status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((
                status,
                Json(json!({"error": "Failed to fetch tweet from Twitter API", "details": e.to_string()})),
            ))
        }
    }
}

/// Handles GET requests to the `/api/rate-limit` endpoint.
///
/// Issues a lightweight probe against the search endpoint and reports the
/// quota headers as structured JSON, along with the probe's HTTP status.
pub async fn handle_rate_limit() -> Result<Json<Value>, HandlerError> {
    let client = client_from_env()?;

    match client.rate_limit_probe().await {
        Ok((quota, status)) => {
            let mut body = serde_json::to_value(&quota).unwrap_or_else(|_| json!({}));
            body["status"] = json!(status);
            Ok(Json(body))
        }
        Err(e) => {
            error!("Error checking rate limit: {}", e);
            Err(server_error("Failed to check rate limit", &e))
        }
    }
}

/// Handles GET requests to the `/health` endpoint.
///
/// Returns the current status and service name. Used by load balancers and
/// monitoring systems to verify that the service is running.
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "tagfeed"}))
}

/// Handles GET requests to the root `/` endpoint.
///
/// Returns a short plain-text banner pointing at the search endpoint.
pub async fn handle_root() -> &'static str {
    info!("Root endpoint hit");
    "Tagfeed is running. Try GET /api/tweets?hashtag=rustlang"
}
