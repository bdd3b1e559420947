//! Shared type definitions for the EpiWatch outbreak monitoring platform.
//!
//! This crate is the single source of truth for all types used across the
//! EpiWatch workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (categories, risk tiers, roles, statuses)
//! - [`structs`] -- Core entity structs (diseases, counties, predictions, alerts)
//! - [`payloads`] -- Request/response payloads shared by client and server

pub mod enums;
pub mod ids;
pub mod payloads;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AlertLevel, ChatRole, DiseaseCategory, InsightStatus, OperatorRole, RiskLevel, Trend,
};
pub use ids::{AlertId, DiseaseId, InsightId, OperatorId};
pub use payloads::{
    AdminStatus, ChatMessage, ChatReply, ChatRequest, CountyListResponse, DiseaseCreate,
    DiseaseListResponse, DiseaseUpdate, GenerateRequest, HarvestRequest, HarvestResponse,
    InsightListResponse, LoginRequest, OperationStatus, OperatorRegistration, SessionToken,
    UploadResponse, VerifyRequest, VerifyResponse,
};
pub use structs::{
    Alert, County, CountyDetail, CountyHistory, CountyRisk, CountyStats, DashboardUser, Disease,
    DiseaseSignal, HealthOperator, HistoryPoint, Insight, NationalSummary, Organization,
    Prediction, PredictionBundle, SummaryAlert, TimelineEntry,
};
