use crate::errors::AquaResult;
use crate::models::{Location, Reading};

/// Result of one provider attempt, as reported by
/// [`IObservationSource::observe_reporting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOutcome {
    Observed,
    Declined,
    Failed,
}

/// Produces complete observations for a location.
pub trait IObservationSource: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Fetch the latest reading for `location`.
    ///
    /// `Ok(None)` means the source explicitly declines: it has no complete,
    /// internally consistent observation. Partial readings are never returned.
    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>>;

    /// Like `observe`, calling `report` once per provider attempted.
    /// Composite sources report their inner providers by name.
    fn observe_reporting(
        &self,
        location: &Location,
        report: &mut dyn FnMut(&str, ProviderOutcome),
    ) -> AquaResult<Option<Reading>> {
        let result = self.observe(location);
        let outcome = match &result {
            Ok(Some(_)) => ProviderOutcome::Observed,
            Ok(None) => ProviderOutcome::Declined,
            Err(_) => ProviderOutcome::Failed,
        };
        report(self.name(), outcome);
        result
    }
}

impl<T: IObservationSource + ?Sized> IObservationSource for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        (**self).observe(location)
    }

    fn observe_reporting(
        &self,
        location: &Location,
        report: &mut dyn FnMut(&str, ProviderOutcome),
    ) -> AquaResult<Option<Reading>> {
        (**self).observe_reporting(location, report)
    }
}
