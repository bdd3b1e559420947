//! Keyed async query cache for the EpiWatch data-access layer.
//!
//! One shared [`QueryCache`] sits between the typed resource services
//! and the HTTP client. Entries are addressed by hierarchical
//! [`QueryKey`]s, aged against a per-read [`CachePolicy`], deduplicated
//! in flight, and invalidated by domain prefix after mutations.
//!
//! # Modules
//!
//! - [`key`] -- Hierarchical query keys and prefix matching
//! - [`cache`] -- The cache, its policy, and the summary poller

pub mod cache;
pub mod key;

pub use cache::{CacheError, CachePolicy, QueryCache};
pub use key::QueryKey;
