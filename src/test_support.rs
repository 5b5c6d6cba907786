//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::lookup::provider::MovieProvider;
use crate::lookup::types::{MovieRecord, Query, Rating, RequestOutcome};

/// A provider that answers every fetch with the same canned outcome.
pub struct CannedProvider {
    outcome: RequestOutcome,
}

impl CannedProvider {
    pub fn new(outcome: RequestOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl MovieProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn fetch(&self, _query: &Query) -> RequestOutcome {
        self.outcome.clone()
    }
}

/// A canned provider that also records every query it is asked to fetch.
pub struct RecordingProvider {
    outcome: RequestOutcome,
    pub seen: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(outcome: RequestOutcome) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MovieProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn fetch(&self, query: &Query) -> RequestOutcome {
        self.seen.lock().unwrap().push(query.as_str().to_string());
        self.outcome.clone()
    }
}

/// A provider for tests asserting that no fetch happens at all.
pub struct UnreachableProvider;

#[async_trait]
impl MovieProvider for UnreachableProvider {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn fetch(&self, query: &Query) -> RequestOutcome {
        panic!("fetch must not be reached (query {query:?})");
    }
}

/// A plausible fetched record for session and provider tests.
pub fn sample_record() -> MovieRecord {
    MovieRecord {
        title: "The Matrix".to_string(),
        poster_url: "https://m.media-amazon.com/images/M/matrix.jpg".to_string(),
        ratings: vec![Rating {
            source: "Internet Movie Database".to_string(),
            value: "8.7/10".to_string(),
        }],
    }
}
