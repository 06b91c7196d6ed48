//! Great-circle distances.
//!
//! Provides the haversine primitive (scalar and batch forms), a dense
//! distance matrix over coordinates, and a human-readable formatter.

mod format;
mod haversine;
mod matrix;

pub use format::format_distance;
pub use haversine::{distances_from, haversine_distance, DistanceFrom, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
