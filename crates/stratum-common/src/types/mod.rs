//! Type definitions for the Stratum storage engine.

mod ids;

pub use ids::PageId;
