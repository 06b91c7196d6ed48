//! Radius membership over a point set.
//!
//! All queries score every point against one precomputed
//! [`DistanceFrom`], so a query is a single O(n) pass plus, for the capped
//! form, an O(k log k) sort of the points inside the radius.

use crate::distance::DistanceFrom;
use crate::models::{Coordinate, Point};

/// Indices of the points within `radius_meters` of `center`, in input order.
pub fn indices_within(points: &[Point], center: Coordinate, radius_meters: f64) -> Vec<usize> {
    let from = DistanceFrom::new(center);
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| from.to(p.lat(), p.lon()) <= radius_meters)
        .map(|(i, _)| i)
        .collect()
}

/// Ids of the points within `radius_meters` of `center`, in input order.
///
/// The boundary is inclusive. Empty input or an empty result both yield an
/// empty list.
///
/// # Examples
///
/// ```
/// use u_territory::models::{Coordinate, Point};
/// use u_territory::membership::points_within;
///
/// let points = vec![
///     Point::new("near", 0.0, 0.01, "E1"),
///     Point::new("far", 1.0, 1.0, "E1"),
/// ];
/// let ids = points_within(&points, Coordinate::new(0.0, 0.0), 2000.0);
/// assert_eq!(ids, vec!["near".to_string()]);
/// ```
pub fn points_within(points: &[Point], center: Coordinate, radius_meters: f64) -> Vec<String> {
    indices_within(points, center, radius_meters)
        .into_iter()
        .map(|i| points[i].id().to_string())
        .collect()
}

/// Capacity-aware variant of [`indices_within`].
///
/// - More than `max_count` points inside the radius: the `max_count`
///   closest, nearest first, ties broken by input order.
/// - Between 1 and `max_count` inside: all of them, in input order.
/// - None inside: the single globally closest point, even though it lies
///   outside the radius. This keeps the covering loop making progress when
///   the radius is small relative to point spacing.
/// - Empty input: empty result.
pub fn indices_within_capped(
    points: &[Point],
    center: Coordinate,
    radius_meters: f64,
    max_count: usize,
) -> Vec<usize> {
    if points.is_empty() {
        return Vec::new();
    }

    let from = DistanceFrom::new(center);
    let distances: Vec<f64> = points.iter().map(|p| from.to(p.lat(), p.lon())).collect();

    let mut inside: Vec<usize> = (0..points.len())
        .filter(|&i| distances[i] <= radius_meters)
        .collect();

    if inside.is_empty() {
        let mut nearest = 0;
        for (i, &d) in distances.iter().enumerate().skip(1) {
            if d < distances[nearest] {
                nearest = i;
            }
        }
        log::debug!(
            "membership: radius {radius_meters:.0} m encloses no point, falling back to nearest at {:.0} m",
            distances[nearest]
        );
        return vec![nearest];
    }

    if inside.len() > max_count {
        // Stable sort keeps input order among equal distances.
        inside.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
        inside.truncate(max_count);
    }
    inside
}

/// Ids of the points selected by [`indices_within_capped`].
///
/// # Examples
///
/// ```
/// use u_territory::models::{Coordinate, Point};
/// use u_territory::membership::points_within_capped;
///
/// let points = vec![
///     Point::new("b", 0.0, 0.002, "E1"),
///     Point::new("a", 0.0, 0.001, "E1"),
///     Point::new("c", 0.0, 0.003, "E1"),
/// ];
/// let ids = points_within_capped(&points, Coordinate::new(0.0, 0.0), 1000.0, 2);
/// assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
///
/// // Nothing inside 10 m: the nearest point is returned anyway.
/// let ids = points_within_capped(&points, Coordinate::new(0.0, 0.0), 10.0, 2);
/// assert_eq!(ids, vec!["a".to_string()]);
/// ```
pub fn points_within_capped(
    points: &[Point],
    center: Coordinate,
    radius_meters: f64,
    max_count: usize,
) -> Vec<String> {
    indices_within_capped(points, center, radius_meters, max_count)
        .into_iter()
        .map(|i| points[i].id().to_string())
        .collect()
}
