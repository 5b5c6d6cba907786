//! # Lookup Screen State
//!
//! Core business state for a movie lookup screen. This module contains
//! domain logic only - no I/O, no rendering. Fetching lives in the
//! `lookup` module.
//!
//! ```text
//! submit id ──▶ begin() ──▶ token
//!                             │
//!                    provider.fetch(query)
//!                             │
//!               resolve(token, outcome) ──▶ lands if token is current
//!                                      └──▶ dropped if a newer begin() ran
//! ```
//!
//! Overlapping lookups are serialized by token, not by cancellation: an
//! outstanding request keeps running, but only the most recently issued
//! token may publish its outcome.

use crate::lookup::types::{MovieRecord, RequestOutcome};

/// Handle identifying one issued lookup. Tokens are ordered by issue time,
/// so a later token always compares greater than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct LookupSession {
    issued: u64,
    in_flight: Option<RequestToken>,
    outcome: Option<RequestOutcome>,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a lookup: issues a fresh token and clears the previous
    /// outcome, so the screen shows only the spinner while the request runs.
    /// Any outstanding request is superseded, not cancelled.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        self.outcome = None;
        token
    }

    /// Publishes the outcome of the request identified by `token`.
    ///
    /// Returns `true` if the outcome landed. A stale token (one superseded
    /// by a later [`begin`](Self::begin)) is discarded and the session is
    /// left untouched.
    pub fn resolve(&mut self, token: RequestToken, outcome: RequestOutcome) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(outcome);
        true
    }

    /// True while an issued request has not yet published its outcome.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn outcome(&self) -> Option<&RequestOutcome> {
        self.outcome.as_ref()
    }

    /// The fetched movie, when the current outcome is a hit.
    pub fn record(&self) -> Option<&MovieRecord> {
        match self.outcome {
            Some(RequestOutcome::Success(ref record)) => Some(record),
            _ => None,
        }
    }
}
