use crate::eco::domain::RiderLevel;
use crate::eco::format::{format_carbon, format_distance, format_duration};
use crate::eco::history::RouteHistoryRecord;
use crate::eco::savings::trees_equivalent;
use serde::Serialize;

/// Lifetime totals behind the dashboard and profile views.
#[derive(Debug, Clone, PartialEq)]
pub struct CommuteStats {
    pub routes_completed: usize,
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    pub total_co2_saved_kg: f64,
    pub average_eco_score: u8,
    pub rider_level: RiderLevel,
}

impl CommuteStats {
    pub fn from_records(records: &[RouteHistoryRecord]) -> Self {
        let routes_completed = records.len();
        let total_distance_km: f64 = records.iter().map(|record| record.distance_km).sum();
        let total_duration_minutes: f64 =
            records.iter().map(|record| record.duration_minutes).sum();
        let total_co2_saved_kg: f64 = records.iter().map(|record| record.co2_saved_kg).sum();

        // Mean over scored routes only; unscored legs still count in totals.
        let scored: Vec<u8> = records.iter().filter_map(|record| record.eco_score).collect();
        let average_eco_score = if scored.is_empty() {
            0
        } else {
            let sum: u32 = scored.iter().map(|score| u32::from(*score)).sum();
            ((sum as f64 / scored.len() as f64).round() as u32).min(100) as u8
        };

        Self {
            routes_completed,
            total_distance_km,
            total_duration_minutes,
            total_co2_saved_kg,
            average_eco_score,
            rider_level: RiderLevel::for_total_saved(total_co2_saved_kg),
        }
    }

    pub fn trees_equivalent(&self) -> f64 {
        trees_equivalent(self.total_co2_saved_kg)
    }

    pub fn achievements(&self) -> Vec<AchievementView> {
        Achievement::ordered()
            .into_iter()
            .map(|achievement| AchievementView {
                achievement,
                title: achievement.title(),
                description: achievement.description(),
                unlocked: achievement.unlocked_by(self),
            })
            .collect()
    }

    pub fn summary(&self) -> CommuteStatsSummary {
        CommuteStatsSummary {
            routes_completed: self.routes_completed,
            total_distance: format_distance(self.total_distance_km),
            total_duration: format_duration(self.total_duration_minutes),
            total_co2_saved: format_carbon(self.total_co2_saved_kg),
            trees_equivalent: self.trees_equivalent(),
            average_eco_score: self.average_eco_score,
            rider_level: self.rider_level,
            rider_level_label: self.rider_level.label(),
            rider_level_rank: self.rider_level.rank(),
            achievements: self.achievements(),
        }
    }
}

/// Static achievement catalog from the product's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstEcoRoute,
    TreePlanter,
    EcoChampion,
}

impl Achievement {
    pub const fn ordered() -> [Self; 3] {
        [Self::FirstEcoRoute, Self::TreePlanter, Self::EcoChampion]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::FirstEcoRoute => "First Eco Route",
            Self::TreePlanter => "Tree Planter",
            Self::EcoChampion => "Eco Champion",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstEcoRoute => "Plan your first sustainable route",
            Self::TreePlanter => "Save CO2 equivalent to 1 tree",
            Self::EcoChampion => "Reach 100 kg CO2 saved",
        }
    }

    pub fn unlocked_by(self, stats: &CommuteStats) -> bool {
        match self {
            Self::FirstEcoRoute => stats.routes_completed >= 1,
            Self::TreePlanter => stats.trees_equivalent() >= 1.0,
            Self::EcoChampion => stats.total_co2_saved_kg >= 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementView {
    pub achievement: Achievement,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Display-ready rollup consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommuteStatsSummary {
    pub routes_completed: usize,
    pub total_distance: String,
    pub total_duration: String,
    pub total_co2_saved: String,
    pub trees_equivalent: f64,
    pub average_eco_score: u8,
    pub rider_level: RiderLevel,
    pub rider_level_label: &'static str,
    pub rider_level_rank: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<AchievementView>,
}
