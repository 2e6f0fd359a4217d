use crate::eco::validate::{
    validate_address, validate_address_with_min, validate_coordinates, DEFAULT_MIN_ADDRESS_LENGTH,
};

#[test]
fn accepts_real_street_addresses() {
    assert!(validate_address("123 Main St, New York, NY 10001"));
    assert!(validate_address("Times Square, Manhattan, NY"));
}

#[test]
fn rejects_empty_and_whitespace_addresses() {
    assert!(!validate_address(""));
    assert!(!validate_address("   "));
}

#[test]
fn rejects_addresses_below_the_minimum_length() {
    assert!(!validate_address("NY"));
    assert!(DEFAULT_MIN_ADDRESS_LENGTH >= 3);
}

#[test]
fn minimum_length_is_tunable() {
    assert!(validate_address_with_min("NY", 2));
    assert!(!validate_address_with_min("NY", 3));
}

#[test]
fn length_counts_trimmed_characters() {
    // Four letters padded with spaces is still four characters.
    assert!(!validate_address("  Oslo  "));
    assert!(validate_address_with_min("  Oslo  ", 4));
}

#[test]
fn accepts_coordinates_inside_wgs84_bounds() {
    assert!(validate_coordinates(40.7128, -74.0060));
    assert!(validate_coordinates(-33.8688, 151.2093));
}

#[test]
fn boundary_coordinates_are_valid() {
    assert!(validate_coordinates(90.0, 180.0));
    assert!(validate_coordinates(-90.0, -180.0));
}

#[test]
fn rejects_out_of_range_latitude() {
    assert!(!validate_coordinates(91.0, -74.0060));
    assert!(!validate_coordinates(-91.0, -74.0060));
}

#[test]
fn rejects_out_of_range_longitude() {
    assert!(!validate_coordinates(40.7128, 181.0));
    assert!(!validate_coordinates(40.7128, -181.0));
}

#[test]
fn rejects_nan_coordinates() {
    assert!(!validate_coordinates(f64::NAN, 0.0));
    assert!(!validate_coordinates(0.0, f64::NAN));
}
