//! Demo dataset and mock statistics for the EpiWatch platform.
//!
//! This crate bundles the data that backs the platform when no live
//! surveillance feed is configured: the 47-county risk table, disease
//! signal lines, predictions, alerts, and the 14-day outbreak timeline,
//! plus deterministic per-county mock statistics and the scripted chat
//! fallback.
//!
//! # Modules
//!
//! - [`dataset`] -- The bundled demo dataset and lookup helpers
//! - [`stats`] -- Seeded mock county statistics and case histories
//! - [`chat`] -- Keyword extraction and canned replies for degraded chat

pub mod chat;
pub mod dataset;
pub mod stats;

pub use chat::{extract_county, extract_disease, scripted_reply};
pub use dataset::{DemoData, active_alerts, critical_alerts};
pub use stats::{MAX_HISTORY_DAYS, MIN_HISTORY_DAYS, county_history, county_stats};
