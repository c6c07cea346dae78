pub mod aridity;
pub mod humidity;
pub mod per_capita;
pub mod temperature;

/// Map `value` onto the first band whose exclusive upper bound exceeds it.
/// Values past every band (and NaN) contribute nothing.
pub(crate) fn stepped(value: f64, bands: &[(f64, f64)]) -> f64 {
    bands
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, contribution)| *contribution)
        .unwrap_or(0.0)
}
