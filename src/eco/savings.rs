//! Carbon arithmetic shared by the score engine and the stats module.

/// Annual CO2 absorption of a single tree, in kg.
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.0;

/// Avoided CO2 in kg from choosing `candidate_per_km` over
/// `baseline_per_km` for `distance_km`. Total over all real inputs: never
/// negative, zero at zero distance, zero when the candidate emits as much or
/// more, and NaN anywhere collapses to zero.
pub fn calculate_carbon_savings(
    baseline_per_km: f64,
    candidate_per_km: f64,
    distance_km: f64,
) -> f64 {
    // f64::max returns the non-NaN operand, which scrubs NaN inputs here.
    let distance = distance_km.max(0.0);
    ((baseline_per_km - candidate_per_km) * distance).max(0.0)
}

/// Expresses saved CO2 as years of a single tree's absorption.
pub fn trees_equivalent(saved_kg: f64) -> f64 {
    saved_kg.max(0.0) / KG_CO2_PER_TREE_YEAR
}
