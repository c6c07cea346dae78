use crate::errors::AquaResult;
use crate::models::{Location, LocationRecord, Reading, StressAssessment};

/// Records or displays assessments.
pub trait IPresentationSink: Send + Sync {
    /// A location was scored.
    fn present(
        &self,
        location: &Location,
        reading: &Reading,
        assessment: &StressAssessment,
    ) -> AquaResult<()>;

    /// A location produced no observation this cycle.
    fn present_unavailable(&self, _location: &Location) -> AquaResult<()> {
        Ok(())
    }

    /// End of a polling cycle with the full store snapshot.
    fn flush(&self, _snapshot: &[LocationRecord]) -> AquaResult<()> {
        Ok(())
    }
}

impl<T: IPresentationSink + ?Sized> IPresentationSink for std::sync::Arc<T> {
    fn present(
        &self,
        location: &Location,
        reading: &Reading,
        assessment: &StressAssessment,
    ) -> AquaResult<()> {
        (**self).present(location, reading, assessment)
    }

    fn present_unavailable(&self, location: &Location) -> AquaResult<()> {
        (**self).present_unavailable(location)
    }

    fn flush(&self, snapshot: &[LocationRecord]) -> AquaResult<()> {
        (**self).flush(snapshot)
    }
}
