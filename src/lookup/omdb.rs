//! OMDb catalog provider.
//!
//! Issues a single `GET <base_url>?i=<id>&apikey=<key>` per lookup and maps
//! everything that can happen to a [`RequestOutcome`]. Answered requests are
//! held back by the configured reveal delay before classification; requests
//! that never produce an answer (timeouts, connect failures, rejected status
//! codes) skip the delay entirely.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::config::OmdbConfig;

use super::provider::MovieProvider;
use super::types::{MovieRecord, Query, Rating, RequestOutcome};

/// Alert text used when the catalog reports a miss without its own message.
const NOT_FOUND_FALLBACK: &str = "Movie not found.";

/// The response-flag value the catalog uses for a successful lookup.
/// The comparison is exact: `"true"` is not a hit.
const TRUE_INDICATOR: &str = "True";

// ============================================================================
// OMDb Wire Types
// ============================================================================

/// Lookup response as served by the catalog.
///
/// Every field is optional so that error pages, truncated bodies, and
/// flagless payloads all decode to something classifiable instead of failing
/// the deserialize step. Unknown fields (the catalog sends many more) are
/// ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct LookupPayload {
    response: Option<String>,
    error: Option<String>,
    title: Option<String>,
    poster: Option<String>,
    ratings: Option<Vec<WireRating>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct WireRating {
    source: String,
    value: String,
}

impl From<WireRating> for Rating {
    fn from(wire: WireRating) -> Self {
        Rating {
            source: wire.source,
            value: wire.value,
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Maps a received 2xx body to its outcome.
///
/// The response-flag decides everything: exactly [`TRUE_INDICATOR`] builds a
/// record. Anything else is a miss carrying the server message or the
/// fallback, including a body that is not JSON at all (the catalog serves
/// non-JSON error pages when it is unhappy).
fn classify_payload(body: &str) -> RequestOutcome {
    let payload: LookupPayload = serde_json::from_str(body).unwrap_or_default();
    if payload.response.as_deref() == Some(TRUE_INDICATOR) {
        RequestOutcome::Success(MovieRecord {
            title: payload.title.unwrap_or_default(),
            poster_url: payload.poster.unwrap_or_default(),
            ratings: payload
                .ratings
                .unwrap_or_default()
                .into_iter()
                .map(Rating::from)
                .collect(),
        })
    } else {
        RequestOutcome::NotFound(
            payload
                .error
                .unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string()),
        )
    }
}

/// Splits a transport failure into the two alert classes the screen knows.
fn classify_transport_error(err: reqwest::Error) -> RequestOutcome {
    if err.is_timeout() {
        warn!("OMDb request timed out: {err}");
        RequestOutcome::Timeout
    } else {
        warn!("OMDb request failed: {err}");
        RequestOutcome::NetworkError(err.to_string())
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Catalog provider backed by the public OMDb HTTP endpoint.
pub struct OmdbProvider {
    config: OmdbConfig,
    client: reqwest::Client,
}

impl OmdbProvider {
    /// Creates a provider from its configuration. The underlying HTTP client
    /// is reused across lookups.
    pub fn new(config: OmdbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MovieProvider for OmdbProvider {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn fetch(&self, query: &Query) -> RequestOutcome {
        info!("OMDb lookup: id={query}");

        let response = match self
            .client
            .get(self.config.base_url.as_str())
            .query(&[
                ("i", query.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .timeout(self.config.request_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return classify_transport_error(err),
        };

        let status = response.status();
        debug!("OMDb response status: {status}");
        if !status.is_success() {
            warn!("OMDb rejected the request: HTTP {status}");
            return RequestOutcome::NetworkError(format!("unexpected status {status}"));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return classify_transport_error(err),
        };

        // Cosmetic pacing on every answered request; see
        // `OmdbConfig::reveal_delay`.
        tokio::time::sleep(self.config.reveal_delay).await;

        classify_payload(&body)
    }
}
