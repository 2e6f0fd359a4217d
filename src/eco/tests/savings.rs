use crate::eco::savings::{calculate_carbon_savings, trees_equivalent, KG_CO2_PER_TREE_YEAR};

#[test]
fn savings_for_bicycle_versus_car() {
    assert_eq!(calculate_carbon_savings(1.2, 0.0, 10.0), 12.0);
}

#[test]
fn zero_when_candidate_emits_more() {
    assert_eq!(calculate_carbon_savings(0.5, 1.0, 10.0), 0.0);
}

#[test]
fn zero_at_zero_distance() {
    assert_eq!(calculate_carbon_savings(1.2, 0.0, 0.0), 0.0);
}

#[test]
fn never_negative_for_any_rates() {
    let rates = [-2.0, -0.5, 0.0, 0.08, 1.2, 50.0];
    for &baseline in &rates {
        for &candidate in &rates {
            assert!(calculate_carbon_savings(baseline, candidate, 10.0) >= 0.0);
        }
    }
}

#[test]
fn negative_distance_is_treated_as_zero() {
    assert_eq!(calculate_carbon_savings(1.2, 0.0, -5.0), 0.0);
}

#[test]
fn nan_inputs_collapse_to_zero() {
    assert_eq!(calculate_carbon_savings(f64::NAN, 0.0, 10.0), 0.0);
    assert_eq!(calculate_carbon_savings(1.2, f64::NAN, 10.0), 0.0);
    assert_eq!(calculate_carbon_savings(1.2, 0.0, f64::NAN), 0.0);
}

#[test]
fn idempotent_for_identical_inputs() {
    assert_eq!(
        calculate_carbon_savings(1.2, 0.05, 8.4),
        calculate_carbon_savings(1.2, 0.05, 8.4)
    );
}

#[test]
fn tree_equivalence_uses_the_annual_absorption_constant() {
    assert_eq!(trees_equivalent(KG_CO2_PER_TREE_YEAR), 1.0);
    assert_eq!(trees_equivalent(-4.0), 0.0);
}
