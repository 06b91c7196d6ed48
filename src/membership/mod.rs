//! Point-in-circle membership queries.
//!
//! - [`points_within`] — every point within a radius (boundary inclusive)
//! - [`points_within_capped`] — at most `max_count` closest points, falling
//!   back to the single nearest point when the radius encloses nothing

mod query;

pub use query::{indices_within, indices_within_capped, points_within, points_within_capped};
