//! Ordered provider chain. The first provider returning a complete reading
//! wins; readings are never assembled from more than one provider.

use aquastress_core::errors::{AquaError, AquaResult};
use aquastress_core::models::{Location, Reading};
use aquastress_core::traits::{IObservationSource, ProviderOutcome};

pub struct FallbackSource {
    sources: Vec<Box<dyn IObservationSource>>,
}

impl FallbackSource {
    pub fn new(sources: Vec<Box<dyn IObservationSource>>) -> Self {
        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Provider names in the order they are tried.
    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl IObservationSource for FallbackSource {
    fn name(&self) -> &str {
        "fallback"
    }

    /// Try each provider in order.
    ///
    /// A provider error is logged and the next provider tried. If every
    /// provider errors, the last error is returned; if at least one declined
    /// cleanly, the chain declines with `Ok(None)`.
    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        self.observe_reporting(location, &mut |_, _| {})
    }

    /// Reports each inner provider tried, stopping at the first reading.
    fn observe_reporting(
        &self,
        location: &Location,
        report: &mut dyn FnMut(&str, ProviderOutcome),
    ) -> AquaResult<Option<Reading>> {
        let mut last_err: Option<AquaError> = None;
        let mut declined = false;

        for source in &self.sources {
            match source.observe_reporting(location, report) {
                Ok(Some(reading)) => return Ok(Some(reading)),
                Ok(None) => {
                    tracing::debug!(
                        provider = source.name(),
                        location = %location.id,
                        "provider declined, trying next"
                    );
                    declined = true;
                }
                Err(e) => {
                    tracing::warn!(
                        provider = source.name(),
                        location = %location.id,
                        error = %e,
                        "provider failed, trying next"
                    );
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if !declined => Err(e),
            _ => Ok(None),
        }
    }
}
