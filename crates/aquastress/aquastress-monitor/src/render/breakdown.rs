//! Plain-text factor breakdown for the `score` command.

use std::fmt::Write;

use aquastress_core::models::SeverityLevel;
use aquastress_scoring::StressBreakdown;

/// One line per factor, index first.
pub fn breakdown_report(b: &StressBreakdown) -> String {
    let level = SeverityLevel::from_index(b.index);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "index        {:.1} {}", b.index, level.label().to_uppercase());
    let _ = writeln!(
        out,
        "aridity      {:>5.1}  (AI {:.3}, PET {:.2} mm/day)",
        b.aridity, b.aridity_index, b.potential_evapotranspiration
    );
    let _ = writeln!(
        out,
        "per capita   {:>5.1}  ({:.3} m3/person/day)",
        b.per_capita, b.per_capita_m3
    );
    let _ = writeln!(out, "temperature  {:>5.1}", b.temperature);
    let _ = writeln!(out, "humidity     {:>5.1}", b.humidity);
    out
}
