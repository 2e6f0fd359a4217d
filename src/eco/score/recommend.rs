use super::config::ScoringConfig;
use crate::eco::domain::{Impact, Recommendation, RouteMetrics, TransportProfile};
use crate::eco::format::format_carbon;
use crate::eco::savings::calculate_carbon_savings;

/// One suggestion per catalog mode that beats the chosen mode on emissions,
/// strongest savings first. The sort is stable, so equal savings keep the
/// catalog's insertion order.
pub fn build_recommendations(
    metrics: &RouteMetrics,
    candidate_per_km: f64,
    profiles: &[TransportProfile],
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = profiles
        .iter()
        .filter(|profile| profile.carbon_per_km < candidate_per_km)
        .map(|profile| {
            let savings = calculate_carbon_savings(
                candidate_per_km,
                profile.carbon_per_km,
                metrics.distance_km,
            );
            Recommendation {
                mode_id: profile.id.clone(),
                message: recommendation_message(profile, savings),
                impact: classify_impact(savings, config),
                carbon_savings_kg: Some(savings),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| {
        let a_savings = a.carbon_savings_kg.unwrap_or(0.0);
        let b_savings = b.carbon_savings_kg.unwrap_or(0.0);
        b_savings
            .partial_cmp(&a_savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    recommendations
}

pub fn classify_impact(savings_kg: f64, config: &ScoringConfig) -> Impact {
    if savings_kg >= config.high_impact_kg {
        Impact::High
    } else if savings_kg >= config.medium_impact_kg {
        Impact::Medium
    } else {
        Impact::Low
    }
}

fn recommendation_message(profile: &TransportProfile, savings_kg: f64) -> String {
    if savings_kg > 0.0 {
        format!(
            "Switch to {} to cut {} of CO2 on this trip",
            profile.label,
            format_carbon(savings_kg)
        )
    } else {
        format!("{} is a lower-carbon option for this trip", profile.label)
    }
}
