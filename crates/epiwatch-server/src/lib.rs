//! EpiWatch REST API server.
//!
//! An Axum HTTP server exposing the outbreak-monitoring API the
//! dashboard consumes: county surveillance, the disease catalogue,
//! predictions and the national summary, operator registration and
//! review, harvested insights, alert handling, sessions, and the
//! assistant chat endpoint.
//!
//! All state is in-memory and seeded from the bundled demo dataset;
//! there is no database. The `epiwatch-server` binary wires this crate
//! to the environment and runs it.

pub mod alerts;
pub mod auth;
pub mod chat;
pub mod counties;
pub mod diseases;
pub mod error;
pub mod insights;
pub mod operators;
pub mod predictions;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
