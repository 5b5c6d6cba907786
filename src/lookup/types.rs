use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated movie identifier: trimmed, guaranteed non-empty.
///
/// Constructing a `Query` is the only input validation in the crate. Once one
/// exists, a lookup can be issued without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims `raw` and rejects it if nothing is left.
    pub fn new(raw: &str) -> Result<Self, InvalidQuery> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidQuery);
        }
        Ok(Query(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The submitted identifier was empty after trimming. No request is issued
/// for input rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuery;

impl fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "movie identifier must not be empty")
    }
}

impl std::error::Error for InvalidQuery {}

/// One rating as served by the catalog, e.g. "Internet Movie Database" rated
/// "8.7/10". Both sides are opaque display strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Decoded success payload: exactly the fields a results screen renders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub poster_url: String,
    /// Ratings in the order the catalog served them.
    pub ratings: Vec<Rating>,
}

/// Terminal result of one lookup invocation.
///
/// Every invocation produces exactly one of these; a failed lookup never
/// carries partial movie data.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// The catalog matched the identifier.
    Success(MovieRecord),
    /// The catalog answered but reported no match. Carries the server's own
    /// error message, or a generic fallback when it sent none.
    NotFound(String),
    /// The transport gave up after the configured request timeout.
    Timeout,
    /// Any other transport failure: connect errors, rejected status codes,
    /// broken body reads. The payload is diagnostic detail for logs.
    NetworkError(String),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    /// Alert text for a failed lookup; `None` on success.
    ///
    /// `NotFound` surfaces the server's message verbatim. The transport
    /// variants stay generic no matter what detail they carry.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::NotFound(message) => Some(message),
            RequestOutcome::Timeout => Some("The request took too long to respond."),
            RequestOutcome::NetworkError(_) => {
                Some("There was a problem reaching the movie catalog.")
            }
        }
    }
}
