pub mod observation_source;
pub mod presentation_sink;
pub mod stress_scorer;
pub mod water_level_source;

pub use observation_source::{IObservationSource, ProviderOutcome};
pub use presentation_sink::IPresentationSink;
pub use stress_scorer::IStressScorer;
pub use water_level_source::IWaterLevelSource;
