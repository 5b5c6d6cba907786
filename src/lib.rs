//! Movie lookup by IMDb identifier, backed by the OMDb catalog.
//!
//! The `core` module holds settings and screen state; the `lookup` module
//! holds the provider seam and the HTTP client behind it. Overlapping
//! lookups are serialized by request token, so a slow earlier response can
//! never overwrite a newer one.

pub mod core;
pub mod lookup;

#[cfg(test)]
pub mod test_support;
