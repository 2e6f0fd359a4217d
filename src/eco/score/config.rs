use serde::{Deserialize, Serialize};

/// Policy constants for banding, impact tiers, and input validation. Exact
/// values are product decisions, so they live here rather than as literals at
/// call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Scores at or above this render green.
    pub green_band_min: u8,
    /// Scores at or above this (and below green) render amber.
    pub amber_band_min: u8,
    /// Savings at or above this many kg count as high impact.
    pub high_impact_kg: f64,
    /// Savings at or above this many kg count as medium impact.
    pub medium_impact_kg: f64,
    /// Minimum trimmed length for a free-text address.
    pub min_address_length: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            green_band_min: 80,
            amber_band_min: 60,
            high_impact_kg: 1.0,
            medium_impact_kg: 0.2,
            min_address_length: 5,
        }
    }
}
