use chrono::NaiveDate;

use crate::eco::catalog::TransportCatalog;
use crate::eco::domain::{RouteMetrics, TransportProfile};
use crate::eco::history::RouteHistoryRecord;
use crate::eco::score::{EcoScoreEngine, ScoringConfig};

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn engine() -> EcoScoreEngine {
    EcoScoreEngine::new(scoring_config())
}

pub(super) fn catalog() -> TransportCatalog {
    TransportCatalog::standard()
}

pub(super) fn car() -> TransportProfile {
    catalog().get("car").cloned().expect("car in catalog")
}

pub(super) fn bicycle() -> TransportProfile {
    catalog().get("bicycle").cloned().expect("bicycle in catalog")
}

pub(super) fn bike_commute_metrics() -> RouteMetrics {
    RouteMetrics::derive(5.2, 25.0, &car(), &bicycle())
}

pub(super) fn history_record(
    mode_id: &str,
    distance_km: f64,
    co2_saved_kg: f64,
    eco_score: Option<u8>,
) -> RouteHistoryRecord {
    RouteHistoryRecord {
        start: "New York".to_string(),
        end: "Brooklyn".to_string(),
        mode_id: mode_id.to_string(),
        distance_km,
        duration_minutes: distance_km * 4.0,
        co2_saved_kg,
        eco_score,
        date: NaiveDate::from_ymd_opt(2026, 8, 1),
    }
}
