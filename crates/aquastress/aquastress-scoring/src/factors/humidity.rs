/// Dry-air factor.
///
/// Formula: `clamp((60 − H) × 2, 0, 100) × 0.1`
/// Range: 0 – 10.
pub const WEIGHT: f64 = 0.1;

pub fn dryness(relative_humidity_percent: f64) -> f64 {
    let d = ((60.0 - relative_humidity_percent) * 2.0).clamp(0.0, 100.0);
    if d.is_nan() {
        0.0
    } else {
        d
    }
}

pub fn calculate(relative_humidity_percent: f64) -> f64 {
    dryness(relative_humidity_percent) * WEIGHT
}
