//! Presentation models built from store snapshots.

pub mod breakdown;
pub mod cards;
pub mod dashboard;
pub mod markers;
pub mod ticker;

pub use breakdown::breakdown_report;
pub use cards::{build_cards, Card};
pub use dashboard::Dashboard;
pub use markers::build_markers;
pub use ticker::ticker_line;

/// Marker color for locations with no assessment.
pub const NO_DATA_COLOR: &str = "#9e9e9e";
