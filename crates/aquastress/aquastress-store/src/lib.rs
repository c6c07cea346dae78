//! # aquastress-store
//!
//! Explicit, owned store of the latest observation and assessment per
//! monitored location. Owned by the orchestrator; there is no global.

pub mod store;

pub use store::ReadingStore;
