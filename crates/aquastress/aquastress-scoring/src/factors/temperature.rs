/// Temperature stress factor.
///
/// Formula: `clamp((T − 15) × 3, 0, 100) × 0.2`
/// Range: 0 – 20. Saturates at 48.3 °C.
pub const WEIGHT: f64 = 0.2;

pub fn stress(temperature_celsius: f64) -> f64 {
    let s = ((temperature_celsius - 15.0) * 3.0).clamp(0.0, 100.0);
    if s.is_nan() {
        0.0
    } else {
        s
    }
}

pub fn calculate(temperature_celsius: f64) -> f64 {
    stress(temperature_celsius) * WEIGHT
}
