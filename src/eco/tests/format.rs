use crate::eco::format::{format_carbon, format_distance, format_duration};

#[test]
fn distance_renders_kilometers_with_one_decimal() {
    assert_eq!(format_distance(5.2), "5.2 km");
    assert_eq!(format_distance(0.5), "0.5 km");
    assert_eq!(format_distance(100.0), "100 km");
}

#[test]
fn distance_renders_meters_below_half_a_kilometer() {
    assert_eq!(format_distance(0.4), "400 m");
    assert_eq!(format_distance(0.1), "100 m");
}

#[test]
fn distance_boundary_is_inclusive_on_the_kilometer_side() {
    assert_eq!(format_distance(0.5), "0.5 km");
    assert_eq!(format_distance(0.499), "499 m");
}

#[test]
fn distance_clamps_negative_and_nan_input() {
    assert_eq!(format_distance(-3.0), "0 m");
    assert_eq!(format_distance(f64::NAN), "0 m");
}

#[test]
fn duration_renders_hours_and_minutes() {
    assert_eq!(format_duration(90.0), "1h 30m");
    assert_eq!(format_duration(120.0), "2h 0m");
}

#[test]
fn duration_omits_zero_hours() {
    assert_eq!(format_duration(45.0), "45m");
    assert_eq!(format_duration(0.0), "0m");
}

#[test]
fn duration_rounds_fractional_minutes_and_clamps_negatives() {
    assert_eq!(format_duration(59.6), "1h 0m");
    assert_eq!(format_duration(-10.0), "0m");
}

#[test]
fn carbon_renders_grams_below_one_kilogram() {
    assert_eq!(format_carbon(0.25), "250 g");
    assert_eq!(format_carbon(0.0), "0 g");
}

#[test]
fn carbon_renders_kilograms_with_one_decimal() {
    assert_eq!(format_carbon(2.1), "2.1 kg");
    assert_eq!(format_carbon(12.0), "12.0 kg");
}

#[test]
fn formatters_are_idempotent_for_identical_inputs() {
    assert_eq!(format_distance(5.2), format_distance(5.2));
    assert_eq!(format_duration(90.0), format_duration(90.0));
    assert_eq!(format_carbon(2.1), format_carbon(2.1));
}
