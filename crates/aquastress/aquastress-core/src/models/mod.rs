pub mod assessment;
pub mod location;
pub mod observation;
pub mod record;
pub mod water_level;

pub use assessment::{SeverityLevel, StressAssessment, StressIndex};
pub use location::{default_locations, Location};
pub use observation::{MissingDataPolicy, Observation, Provider, RawSample, Reading};
pub use record::{LocationRecord, RecordStatus};
pub use water_level::WaterLevelReading;
