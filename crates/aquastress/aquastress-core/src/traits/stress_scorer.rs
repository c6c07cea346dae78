use crate::models::{Observation, StressAssessment};

/// Water stress scoring. Total over its numeric domain.
pub trait IStressScorer: Send + Sync {
    /// Score an observation. The index is always in [0.0, 100.0].
    fn score(&self, observation: &Observation) -> StressAssessment;
}
