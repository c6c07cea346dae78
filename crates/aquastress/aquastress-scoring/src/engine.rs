use aquastress_core::models::{Observation, Reading, StressAssessment};
use aquastress_core::traits::IStressScorer;

use crate::formula::{self, StressBreakdown};

/// Water stress engine implementing the 4-factor additive index.
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StressEngine;

impl StressEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score with a full breakdown of each factor.
    pub fn breakdown(&self, observation: &Observation) -> StressBreakdown {
        formula::compute_breakdown(observation)
    }

    /// Score a batch of readings, keyed by location id.
    pub fn score_batch(&self, readings: &[Reading]) -> Vec<(String, StressAssessment)> {
        readings
            .iter()
            .map(|r| (r.location_id.clone(), self.score(&r.observation)))
            .collect()
    }
}

impl IStressScorer for StressEngine {
    fn score(&self, observation: &Observation) -> StressAssessment {
        StressAssessment::from_total(formula::compute(observation))
    }
}
