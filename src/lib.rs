//! Calculation core for a green-commuting product.
//!
//! Everything in here is synchronous and side-effect free: unit formatting,
//! input validation, carbon-savings arithmetic, eco-score aggregation, and
//! commute statistics. Rendering, routing, authentication, and transport are
//! collaborator concerns and live outside this crate.

pub mod config;
pub mod eco;
pub mod error;
pub mod telemetry;

pub use eco::catalog::TransportCatalog;
pub use eco::domain::{
    Impact, Recommendation, RiderLevel, RouteMetrics, ScoreBand, TransportProfile,
};
pub use eco::score::{EcoScoreEngine, RouteAssessment, ScoringConfig};
