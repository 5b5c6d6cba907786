pub mod omdb;
pub mod provider;
pub mod types;

pub use omdb::OmdbProvider;
pub use provider::MovieProvider;
pub use types::{InvalidQuery, MovieRecord, Query, Rating, RequestOutcome};
