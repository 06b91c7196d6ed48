//! Read-only diagnostics over circle collections.
//!
//! - [`overlap`] — points claimed by more than one circle
//! - [`coverage_stats`] — assignment totals and circle size distribution
//! - [`owner_workloads`] — assigned point count per owner

mod overlap;
mod stats;

pub use overlap::{assignments, overlap};
pub use stats::{coverage_stats, owner_workloads, CoverageStats};
