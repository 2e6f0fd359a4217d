use crate::eco::savings::calculate_carbon_savings;
use serde::{Deserialize, Serialize};

/// Scrubs a possibly-negative or NaN measurement down to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Measured outcome of a single candidate route. All fields are kept
/// non-negative; constructors clamp rather than reject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub carbon_emissions_kg: f64,
    pub avoided_emissions_kg: f64,
}

impl RouteMetrics {
    pub fn new(
        distance_km: f64,
        duration_minutes: f64,
        carbon_emissions_kg: f64,
        avoided_emissions_kg: f64,
    ) -> Self {
        Self {
            distance_km: non_negative(distance_km),
            duration_minutes: non_negative(duration_minutes),
            carbon_emissions_kg: non_negative(carbon_emissions_kg),
            avoided_emissions_kg: non_negative(avoided_emissions_kg),
        }
    }

    /// Derives emissions figures from the per-km rates of the chosen and
    /// baseline modes.
    pub fn derive(
        distance_km: f64,
        duration_minutes: f64,
        baseline: &TransportProfile,
        candidate: &TransportProfile,
    ) -> Self {
        let distance_km = non_negative(distance_km);
        Self::new(
            distance_km,
            duration_minutes,
            candidate.carbon_per_km * distance_km,
            calculate_carbon_savings(baseline.carbon_per_km, candidate.carbon_per_km, distance_km),
        )
    }
}

/// Static per-mode emission, speed, and cost factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProfile {
    pub id: String,
    pub label: String,
    pub carbon_per_km: f64,
    pub speed_kmh: f64,
    pub cost_per_km: f64,
}

impl TransportProfile {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        carbon_per_km: f64,
        speed_kmh: f64,
        cost_per_km: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            carbon_per_km: non_negative(carbon_per_km),
            speed_kmh: if speed_kmh.is_finite() && speed_kmh > 0.0 {
                speed_kmh
            } else {
                1.0
            },
            cost_per_km: non_negative(cost_per_km),
        }
    }
}

/// How much difference a suggested mode switch makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Suggested lower-carbon alternative for the same trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mode_id: String,
    pub message: String,
    pub impact: Impact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_savings_kg: Option<f64>,
}

/// Three-tier color classification of an eco score, the display contract the
/// presentation layer keys its badges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Green,
    Amber,
    Red,
}

impl ScoreBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Green, Self::Amber, Self::Red]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }

    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
        }
    }
}

/// Lifetime rider tier keyed on total CO2 saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiderLevel {
    EcoBeginner,
    ClimateHero,
    EcoWarrior,
    GreenChampion,
    EcoMaster,
}

impl RiderLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EcoBeginner,
            Self::ClimateHero,
            Self::EcoWarrior,
            Self::GreenChampion,
            Self::EcoMaster,
        ]
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::EcoBeginner => 1,
            Self::ClimateHero => 2,
            Self::EcoWarrior => 3,
            Self::GreenChampion => 4,
            Self::EcoMaster => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EcoBeginner => "Eco Beginner",
            Self::ClimateHero => "Climate Hero",
            Self::EcoWarrior => "Eco Warrior",
            Self::GreenChampion => "Green Champion",
            Self::EcoMaster => "Eco Master",
        }
    }

    /// Threshold in kg of lifetime CO2 saved at which the tier unlocks.
    pub const fn threshold_kg(self) -> f64 {
        match self {
            Self::EcoBeginner => 0.0,
            Self::ClimateHero => 0.5,
            Self::EcoWarrior => 2.0,
            Self::GreenChampion => 5.0,
            Self::EcoMaster => 10.0,
        }
    }

    pub fn for_total_saved(total_saved_kg: f64) -> Self {
        let total = if total_saved_kg.is_finite() {
            total_saved_kg
        } else {
            0.0
        };
        let mut level = Self::EcoBeginner;
        for candidate in Self::ordered() {
            if total >= candidate.threshold_kg() {
                level = candidate;
            }
        }
        level
    }
}
