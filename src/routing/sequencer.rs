//! Nearest-neighbor circle sequencing.
//!
//! Starting from a given location, always visit the unvisited circle whose
//! center is closest to the current position, then move to that center.
//!
//! # Complexity
//!
//! O(n²) where n = number of circles.
//!
//! # Reference
//!
//! The nearest-neighbor tour is the simplest constructive TSP heuristic;
//! tours are typically 15-25% above optimal.

use crate::distance::DistanceMatrix;
use crate::models::{Circle, Coordinate};

/// Returns circle indices in nearest-neighbor visiting order from `start`.
///
/// Ties go to the circle that comes first among those still unvisited, in
/// input order. Zero or one circle is returned unchanged.
///
/// # Examples
///
/// ```
/// use u_territory::models::{Circle, Coordinate};
/// use u_territory::routing::sequence_order;
///
/// let circle = |name: &str, lon: f64| {
///     Circle::new(name, Coordinate::new(0.0, lon), 500.0, "#000", "E1", vec![])
/// };
/// let circles = vec![circle("far", 0.3), circle("near", 0.1), circle("mid", 0.2)];
/// assert_eq!(sequence_order(&circles, Coordinate::new(0.0, 0.0)), vec![1, 2, 0]);
/// ```
pub fn sequence_order(circles: &[Circle], start: Coordinate) -> Vec<usize> {
    let centers: Vec<Coordinate> = circles.iter().map(Circle::center).collect();
    nearest_neighbor_order(&centers, start)
}

/// Nearest-neighbor visiting order over bare locations.
pub(crate) fn nearest_neighbor_order(centers: &[Coordinate], start: Coordinate) -> Vec<usize> {
    let n = centers.len();
    if n <= 1 {
        return (0..n).collect();
    }

    // Location 0 is the start, location i + 1 is center i.
    let mut stops = Vec::with_capacity(n + 1);
    stops.push(start);
    stops.extend_from_slice(centers);
    let distances = DistanceMatrix::from_coordinates(&stops);

    let mut unvisited: Vec<usize> = (1..=n).collect();
    let mut order = Vec::with_capacity(n);
    let mut current = 0;

    while let Some(pos) = distances.nearest_neighbor(current, &unvisited) {
        let next = unvisited.remove(pos);
        order.push(next - 1);
        current = next;
    }
    order
}

/// Reorders `circles` into nearest-neighbor visiting order from `start`.
///
/// Returns a permutation of the input; see [`sequence_order`].
pub fn sequence(circles: Vec<Circle>, start: Coordinate) -> Vec<Circle> {
    let order = sequence_order(&circles, start);
    let mut slots: Vec<Option<Circle>> = circles.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Path length in meters of `start → c1 → c2 → … → cn` through the circle
/// centers, without returning to the start.
pub fn route_length(start: Coordinate, circles: &[Circle]) -> f64 {
    let mut total = 0.0;
    let mut current = start;
    for c in circles {
        let center = c.center();
        total += current.distance_to(&center);
        current = center;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(name: &str, lat: f64, lon: f64) -> Circle {
        Circle::new(name, Coordinate::new(lat, lon), 1000.0, "#000", "E1", vec![])
    }

    fn names(circles: &[Circle]) -> Vec<&str> {
        circles.iter().map(Circle::name).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sequence(vec![], Coordinate::new(0.0, 0.0)).is_empty());
        let one = sequence(vec![circle("a", 5.0, 5.0)], Coordinate::new(0.0, 0.0));
        assert_eq!(names(&one), vec!["a"]);
    }

    #[test]
    fn test_line_visits_in_order() {
        let circles = vec![
            circle("c3", 0.0, 0.3),
            circle("c1", 0.0, 0.1),
            circle("c2", 0.0, 0.2),
        ];
        let route = sequence(circles, Coordinate::new(0.0, 0.0));
        assert_eq!(names(&route), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_start_changes_order() {
        let circles = vec![
            circle("west", 0.0, -0.1),
            circle("mid", 0.0, 0.0),
            circle("east", 0.0, 0.1),
        ];
        let route = sequence(circles, Coordinate::new(0.0, 0.12));
        assert_eq!(names(&route), vec!["east", "mid", "west"]);
    }

    #[test]
    fn test_each_hop_is_nearest() {
        let circles: Vec<Circle> = (0..12)
            .map(|i| {
                let lat = ((i * 7) % 5) as f64 * 0.03;
                let lon = ((i * 3) % 7) as f64 * 0.02;
                circle(&format!("c{i}"), lat, lon)
            })
            .collect();
        let start = Coordinate::new(0.05, 0.05);
        let route = sequence(circles.clone(), start);
        assert_eq!(route.len(), circles.len());

        let mut current = start;
        let mut left: Vec<&Circle> = circles.iter().collect();
        for chosen in &route {
            let best = left
                .iter()
                .map(|c| current.distance_to(&c.center()))
                .fold(f64::INFINITY, f64::min);
            assert!((current.distance_to(&chosen.center()) - best).abs() < 1e-9);
            left.retain(|c| c.name() != chosen.name());
            current = chosen.center();
        }
        assert!(left.is_empty());
    }

    #[test]
    fn test_tie_keeps_input_order() {
        let circles = vec![circle("east", 0.0, 0.1), circle("west", 0.0, -0.1)];
        let route = sequence(circles, Coordinate::new(0.0, 0.0));
        assert_eq!(names(&route), vec!["east", "west"]);
    }

    #[test]
    fn test_no_worse_than_reverse_on_line() {
        let circles = vec![
            circle("a", 0.0, 0.4),
            circle("b", 0.0, 0.1),
            circle("c", 0.0, 0.3),
            circle("d", 0.0, 0.2),
        ];
        let start = Coordinate::new(0.0, 0.0);
        let route = sequence(circles, start);
        let mut reversed = route.clone();
        reversed.reverse();
        assert!(route_length(start, &route) <= route_length(start, &reversed));
    }

    #[test]
    fn test_route_length() {
        let start = Coordinate::new(0.0, 0.0);
        let circles = vec![circle("a", 0.0, 0.01), circle("b", 0.0, 0.02)];
        let expected = 2.0 * start.distance_to(&Coordinate::new(0.0, 0.01));
        assert!((route_length(start, &circles) - expected).abs() < 1e-6);
        assert_eq!(route_length(start, &[]), 0.0);
    }
}
