//! # u-territory
//!
//! Territory planning for field visits: partitions geolocated points into
//! capacity-bounded circles and orders circles into a visit sequence.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Coordinate, Circle, Bounds)
//! - [`distance`] — Haversine distances and a dense distance matrix
//! - [`membership`] — Point-in-circle queries, plain and capacity-capped
//! - [`covering`] — Center selection, greedy covering, manual-circle split
//! - [`routing`] — Nearest-neighbor sequencing and visit-day assignment
//! - [`analysis`] — Overlap detection and coverage statistics
//! - [`error`] — Error type for configuration and record validation
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use u_territory::covering::{cover, CoverConfig};
//! use u_territory::models::Point;
//! use u_territory::routing::{assign_visit_days, ScheduleConfig};
//!
//! let points: Vec<Point> = (0..30)
//!     .map(|i| Point::new(format!("M{i:03}"), 12.9 + (i % 6) as f64 * 0.02, 77.5 + (i / 6) as f64 * 0.02, "E1"))
//!     .collect();
//! let config = CoverConfig::default().with_radius(3000.0).with_max_per_circle(8).with_seed(1);
//! let mut circles = cover(&points, &config, "#00FF00", "E1").unwrap();
//! assert_eq!(circles.iter().map(|c| c.member_count()).sum::<usize>(), 30);
//!
//! assign_visit_days(&mut circles, &ScheduleConfig::per_owner(3), &HashMap::new());
//! assert_eq!(circles.iter().filter(|c| c.visit_order().is_some()).count(), 3usize.min(circles.len()));
//! ```

pub mod analysis;
pub mod covering;
pub mod distance;
pub mod error;
pub mod membership;
pub mod models;
pub mod routing;

pub use error::{Error, Result};
