//! Display formatting for raw route measurements. Callers get strings back;
//! the presentation layer never does unit math itself.

/// Below this many kilograms carbon renders in grams.
pub const CARBON_GRAM_CUTOFF_KG: f64 = 1.0;

fn clamped(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Meters below half a kilometer, one-decimal kilometers from 0.5 km up.
pub fn format_distance(km: f64) -> String {
    let km = clamped(km);
    if km < 0.5 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{} km", trim_decimal(km, 1))
    }
}

/// Canonical `"Xh Ym"` form, hour part omitted when zero.
pub fn format_duration(minutes: f64) -> String {
    let total = clamped(minutes).round() as i64;
    let hours = total / 60;
    let remainder = total % 60;
    if hours == 0 {
        format!("{remainder}m")
    } else {
        format!("{hours}h {remainder}m")
    }
}

/// Grams below [`CARBON_GRAM_CUTOFF_KG`], one-decimal kilograms otherwise.
pub fn format_carbon(kg: f64) -> String {
    let kg = clamped(kg);
    if kg < CARBON_GRAM_CUTOFF_KG {
        format!("{} g", (kg * 1000.0).round() as i64)
    } else {
        format!("{:.1} kg", kg)
    }
}

/// Renders with up to `places` decimals, dropping a trailing ".0" so whole
/// kilometers read as "100 km" rather than "100.0 km".
fn trim_decimal(value: f64, places: usize) -> String {
    let rendered = format!("{value:.places$}");
    match rendered.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}
