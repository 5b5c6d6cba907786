use async_trait::async_trait;
use log::debug;

use super::types::{InvalidQuery, Query, RequestOutcome};

/// A movie catalog that can be asked about one identifier at a time.
///
/// The contract is total: every `fetch` produces exactly one
/// [`RequestOutcome`], and failures are data, never panics. Implementations
/// decide their own transport; the screen layer only sees outcomes.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Looks up a validated identifier and classifies whatever happens.
    async fn fetch(&self, query: &Query) -> RequestOutcome;

    /// Raw-string entry point: trims and validates `raw`, then fetches.
    ///
    /// Empty or whitespace-only input fails fast with [`InvalidQuery`] and
    /// performs no I/O at all.
    async fn lookup(&self, raw: &str) -> Result<RequestOutcome, InvalidQuery> {
        let query = Query::new(raw)?;
        debug!("dispatching lookup to {}: id={query}", self.name());
        Ok(self.fetch(&query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingProvider, UnreachableProvider};

    #[test]
    fn test_lookup_rejects_blank_input_without_fetching() {
        // UnreachableProvider panics if fetch is ever reached.
        let provider = UnreachableProvider;
        let result = tokio_test::block_on(provider.lookup("   \t"));
        assert_eq!(result, Err(InvalidQuery));
    }

    #[test]
    fn test_lookup_passes_trimmed_query_to_fetch() {
        let provider = RecordingProvider::new(RequestOutcome::NotFound("nope".to_string()));
        let outcome = tokio_test::block_on(provider.lookup("  tt0111161\n")).unwrap();
        assert_eq!(outcome, RequestOutcome::NotFound("nope".to_string()));
        assert_eq!(provider.seen.lock().unwrap().as_slice(), ["tt0111161"]);
    }

    #[test]
    fn test_lookup_forwards_valid_input_unchanged() {
        let provider = RecordingProvider::new(RequestOutcome::Timeout);
        let outcome = tokio_test::block_on(provider.lookup("tt0133093")).unwrap();
        assert_eq!(outcome, RequestOutcome::Timeout);
        assert_eq!(provider.seen.lock().unwrap().as_slice(), ["tt0133093"]);
    }
}
