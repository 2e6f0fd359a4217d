//! The eco-impact core: every function in this module tree is a pure,
//! stateless transform over plain value records.

pub mod catalog;
pub mod domain;
pub mod format;
pub mod history;
pub mod savings;
pub mod score;
pub mod stats;
pub mod validate;

#[cfg(test)]
mod tests;

pub use catalog::TransportCatalog;
pub use domain::{Impact, Recommendation, RiderLevel, RouteMetrics, ScoreBand, TransportProfile};
pub use score::{EcoScoreEngine, RouteAssessment, ScoringConfig};
pub use stats::CommuteStats;
