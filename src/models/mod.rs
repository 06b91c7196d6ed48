//! Domain model types for territory planning.
//!
//! Provides the core records: geolocated points owned by an agent, circles
//! grouping those points under a radius, and coordinate helpers.

mod circle;
mod point;

pub use circle::Circle;
pub use point::{map_center, Bounds, Coordinate, Point, DEFAULT_MAP_CENTER};
