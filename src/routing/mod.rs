//! Visit sequencing for circles.
//!
//! - [`sequence`] / [`sequence_order`] — nearest-neighbor ordering from a
//!   start location, O(n²)
//! - [`assign_visit_days`] — pick the largest circles and number them in
//!   route order
//!
//! Sequencing is a single greedy pass, not an exact TSP solve.

mod schedule;
mod sequencer;

pub use schedule::{assign_visit_days, RankingScope, ScheduleConfig};
pub use sequencer::{route_length, sequence, sequence_order};
