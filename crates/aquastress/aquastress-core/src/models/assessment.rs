use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_STRESS_INDEX;

/// Water stress index clamped to [0.0, 100.0].
/// NaN collapses to 0.0 so the invariant holds for any input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StressIndex(f64);

impl StressIndex {
    /// Create a new StressIndex, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_STRESS_INDEX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn severity(self) -> SeverityLevel {
        SeverityLevel::from_index(self.0)
    }
}

impl fmt::Display for StressIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for StressIndex {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<StressIndex> for f64 {
    fn from(i: StressIndex) -> Self {
        i.0
    }
}

/// Discretization of the stress index, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Low,
    Moderate,
    Warning,
    Severe,
    Critical,
}

impl SeverityLevel {
    // Inclusive lower bounds of each band.
    pub const CRITICAL: f64 = 80.0;
    pub const SEVERE: f64 = 60.0;
    pub const WARNING: f64 = 40.0;
    pub const MODERATE: f64 = 20.0;

    /// All levels in ascending order.
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::Low,
        SeverityLevel::Moderate,
        SeverityLevel::Warning,
        SeverityLevel::Severe,
        SeverityLevel::Critical,
    ];

    /// Map an index to its level. Boundaries belong to the higher level.
    pub fn from_index(index: f64) -> Self {
        if index >= Self::CRITICAL {
            SeverityLevel::Critical
        } else if index >= Self::SEVERE {
            SeverityLevel::Severe
        } else if index >= Self::WARNING {
            SeverityLevel::Warning
        } else if index >= Self::MODERATE {
            SeverityLevel::Moderate
        } else {
            SeverityLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Severe => "severe",
            SeverityLevel::Critical => "critical",
        }
    }

    /// Display color hint (hex RGB).
    pub fn color(self) -> &'static str {
        match self {
            SeverityLevel::Low => "#2e7d32",
            SeverityLevel::Moderate => "#9e9d24",
            SeverityLevel::Warning => "#f9a825",
            SeverityLevel::Severe => "#ef6c00",
            SeverityLevel::Critical => "#c62828",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressAssessment {
    pub index: StressIndex,
    pub severity: SeverityLevel,
}

impl StressAssessment {
    /// Build an assessment from a raw total; the level is derived from the
    /// clamped index.
    pub fn from_total(total: f64) -> Self {
        let index = StressIndex::new(total);
        Self {
            index,
            severity: index.severity(),
        }
    }

    pub fn severity_color(&self) -> &'static str {
        self.severity.color()
    }
}
