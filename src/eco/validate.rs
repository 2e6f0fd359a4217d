//! Pass/fail predicates applied during input collection, before a route
//! request ever leaves the client. Out-of-range values are rejected, never
//! silently corrected.

/// Trimmed addresses shorter than this are rejected.
pub const DEFAULT_MIN_ADDRESS_LENGTH: usize = 5;

pub fn validate_address(text: &str) -> bool {
    validate_address_with_min(text, DEFAULT_MIN_ADDRESS_LENGTH)
}

/// The minimum length is a deployment knob (`ECO_MIN_ADDRESS_LENGTH`), so the
/// threshold-taking form is the one the engine calls.
pub fn validate_address_with_min(text: &str, min_length: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_length
}

/// Inclusive WGS84 bounds; NaN fails both comparisons and is rejected.
pub fn validate_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}
