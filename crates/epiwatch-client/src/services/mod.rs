//! Typed resource services.
//!
//! One service per API resource, each a thin wrapper mapping domain
//! operations onto endpoints through the shared [`ApiClient`]. Services
//! do no caching; the [`crate::queries::Queries`] layer adds that on
//! top.
//!
//! [`ApiClient`]: crate::http::ApiClient

pub mod alerts;
pub mod counties;
pub mod diseases;
pub mod insights;
pub mod operators;
pub mod predictions;

pub use alerts::AlertService;
pub use counties::{CountyFilter, CountyService};
pub use diseases::{DiseaseFilter, DiseaseService};
pub use insights::{InsightFilter, InsightService};
pub use operators::{OperatorService, OperatorStatusFilter};
pub use predictions::PredictionService;
