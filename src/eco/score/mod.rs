mod config;
mod recommend;
mod rules;

pub use config::ScoringConfig;
pub use recommend::{build_recommendations, classify_impact};
pub use rules::{band_for_score, compute_eco_score};

use crate::eco::catalog::TransportCatalog;
use crate::eco::domain::{Recommendation, RouteMetrics, ScoreBand, TransportProfile};
use crate::eco::format::{format_carbon, format_distance, format_duration};
use crate::eco::savings::trees_equivalent;
use serde::Serialize;

/// Stateless aggregator applying the banding policy to a candidate route.
pub struct EcoScoreEngine {
    config: ScoringConfig,
}

impl EcoScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        metrics: &RouteMetrics,
        baseline_per_km: f64,
        candidate_per_km: f64,
    ) -> u8 {
        compute_eco_score(metrics, baseline_per_km, candidate_per_km)
    }

    pub fn band(&self, score: u8) -> ScoreBand {
        band_for_score(score, &self.config)
    }

    /// The full display contract for one route: score, band, formatted
    /// figures, a savings note when there is anything to celebrate, and the
    /// ranked mode switches.
    pub fn assess(
        &self,
        metrics: &RouteMetrics,
        baseline: &TransportProfile,
        candidate: &TransportProfile,
        catalog: &TransportCatalog,
    ) -> RouteAssessment {
        let eco_score = compute_eco_score(metrics, baseline.carbon_per_km, candidate.carbon_per_km);
        let band = band_for_score(eco_score, &self.config);

        let recommendations = build_recommendations(
            metrics,
            candidate.carbon_per_km,
            catalog.profiles(),
            &self.config,
        );

        let mut observations = Vec::new();
        if metrics.avoided_emissions_kg > 0.0 {
            observations.push(format!(
                "Saving {} of CO2 versus the {} baseline",
                format_carbon(metrics.avoided_emissions_kg),
                baseline.label
            ));
            let trees = trees_equivalent(metrics.avoided_emissions_kg);
            if trees >= 0.1 {
                observations.push(format!(
                    "Equivalent to {trees:.1} tree-years of absorption"
                ));
            }
        }
        if let Some(best) = recommendations.first() {
            if best.carbon_savings_kg.unwrap_or(0.0) > 0.0 {
                observations.push(best.message.clone());
            }
        }

        RouteAssessment {
            mode_id: candidate.id.clone(),
            mode_label: candidate.label.clone(),
            eco_score,
            band,
            band_label: band.label(),
            color_token: band.color_token(),
            metrics: *metrics,
            distance_display: format_distance(metrics.distance_km),
            duration_display: format_duration(metrics.duration_minutes),
            emissions_display: format_carbon(metrics.carbon_emissions_kg),
            avoided_display: format_carbon(metrics.avoided_emissions_kg),
            observations,
            recommendations,
        }
    }
}

/// Composite result the presentation layer consumes verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAssessment {
    pub mode_id: String,
    pub mode_label: String,
    pub eco_score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub color_token: &'static str,
    pub metrics: RouteMetrics,
    pub distance_display: String,
    pub duration_display: String,
    pub emissions_display: String,
    pub avoided_display: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}
