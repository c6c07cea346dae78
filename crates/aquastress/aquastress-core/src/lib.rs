//! # aquastress-core
//!
//! Foundation crate for the aquastress monitor.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AquaConfig;
pub use errors::{AquaError, AquaResult};
pub use models::{
    Location, LocationRecord, MissingDataPolicy, Observation, Provider, RawSample, Reading,
    RecordStatus, SeverityLevel, StressAssessment, StressIndex, WaterLevelReading,
};
