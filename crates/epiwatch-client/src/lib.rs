//! Typed data-access layer for the EpiWatch API.
//!
//! The dashboard talks to the API exclusively through this crate: a
//! request wrapper that normalizes every failure into [`ClientError`],
//! typed services per resource, a cached query layer with per-domain
//! stale times and mutation invalidation, explicit sessions, and a chat
//! client that degrades to scripted replies when the live endpoint is
//! down.
//!
//! # Modules
//!
//! - [`config`] -- Base URL and timeout from the environment
//! - [`http`] -- The request wrapper
//! - [`error`] -- [`ClientError`]
//! - [`services`] -- Typed per-resource services
//! - [`queries`] -- Cached query layer over the services
//! - [`session`] -- Login/signup and bearer-token stamping
//! - [`chat`] -- Chat with explicit degraded mode

pub mod chat;
pub mod config;
pub mod error;
pub mod http;
pub mod queries;
pub mod services;
pub mod session;

pub use chat::{ChatClient, ChatOutcome};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ApiClient;
pub use queries::{Queries, SUMMARY_POLL_INTERVAL};
pub use services::{
    AlertService, CountyFilter, CountyService, DiseaseFilter, DiseaseService, InsightFilter,
    InsightService, OperatorService, OperatorStatusFilter, PredictionService,
};
pub use session::Session;
