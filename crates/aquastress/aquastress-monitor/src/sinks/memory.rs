use std::sync::{Mutex, MutexGuard, PoisonError};

use aquastress_core::errors::AquaResult;
use aquastress_core::models::{Location, LocationRecord, Reading, StressAssessment};
use aquastress_core::traits::IPresentationSink;

/// One call received by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Presented {
        location_id: String,
        assessment: StressAssessment,
    },
    Unavailable {
        location_id: String,
    },
    Flushed {
        snapshot: Vec<LocationRecord>,
    },
}

/// Collects every sink call in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SinkEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// Assessments presented so far, in call order.
    pub fn presented(&self) -> Vec<(String, StressAssessment)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Presented {
                    location_id,
                    assessment,
                } => Some((location_id.clone(), *assessment)),
                _ => None,
            })
            .collect()
    }

    pub fn unavailable(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Unavailable { location_id } => Some(location_id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, SinkEvent::Flushed { .. }))
            .count()
    }

    pub fn last_snapshot(&self) -> Option<Vec<LocationRecord>> {
        self.lock().iter().rev().find_map(|e| match e {
            SinkEvent::Flushed { snapshot } => Some(snapshot.clone()),
            _ => None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IPresentationSink for MemorySink {
    fn present(
        &self,
        location: &Location,
        _reading: &Reading,
        assessment: &StressAssessment,
    ) -> AquaResult<()> {
        self.lock().push(SinkEvent::Presented {
            location_id: location.id.clone(),
            assessment: *assessment,
        });
        Ok(())
    }

    fn present_unavailable(&self, location: &Location) -> AquaResult<()> {
        self.lock().push(SinkEvent::Unavailable {
            location_id: location.id.clone(),
        });
        Ok(())
    }

    fn flush(&self, snapshot: &[LocationRecord]) -> AquaResult<()> {
        self.lock().push(SinkEvent::Flushed {
            snapshot: snapshot.to_vec(),
        });
        Ok(())
    }
}
