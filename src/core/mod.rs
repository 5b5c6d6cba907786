//! # Core Application Logic
//!
//! This module contains the lookup screen's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Config (settings)    │
//!                    │  • Session (tokens +    │
//!                    │    published outcome)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   lookup   │      │    TUI     │      │    Web     │
//!     │  (reqwest) │      │  (future)  │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Settings with a defaults → env → explicit hierarchy
//! - [`state`]: The `LookupSession`, request tokens plus the published outcome

pub mod config;
pub mod state;

// Re-export commonly used types for convenience
pub use config::OmdbConfig;
pub use state::{LookupSession, RequestToken};
