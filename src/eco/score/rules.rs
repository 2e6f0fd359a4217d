use super::config::ScoringConfig;
use crate::eco::domain::{RouteMetrics, ScoreBand};

fn scrub(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Maps the avoided-emission share of a trip to an integer score in
/// [0, 100]: the fraction of the trip's total carbon footprint the rider
/// avoided. Monotonic in both directions: more avoided carbon never lowers
/// the score, more emitted carbon never raises it.
///
/// A trip with no carbon on either side of the ledger falls back to the
/// per-km rates, so a zero-length bicycle leg still scores as clean.
pub fn compute_eco_score(
    metrics: &RouteMetrics,
    baseline_per_km: f64,
    candidate_per_km: f64,
) -> u8 {
    let emissions = scrub(metrics.carbon_emissions_kg);
    let avoided = scrub(metrics.avoided_emissions_kg);

    let ratio = if emissions + avoided > 0.0 {
        avoided / (emissions + avoided)
    } else {
        rate_ratio(baseline_per_km, candidate_per_km)
    };

    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

fn rate_ratio(baseline_per_km: f64, candidate_per_km: f64) -> f64 {
    let baseline = scrub(baseline_per_km);
    let candidate = scrub(candidate_per_km);
    if baseline > 0.0 {
        ((baseline - candidate) / baseline).clamp(0.0, 1.0)
    } else if candidate > 0.0 {
        0.0
    } else {
        1.0
    }
}

pub fn band_for_score(score: u8, config: &ScoringConfig) -> ScoreBand {
    if score >= config.green_band_min {
        ScoreBand::Green
    } else if score >= config.amber_band_min {
        ScoreBand::Amber
    } else {
        ScoreBand::Red
    }
}
