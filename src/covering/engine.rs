//! Greedy peeling loop.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::naming::{alphabetical_name, numeric_name};
use super::palette::palette_color;
use super::{select_center, CoverConfig, Naming};
use crate::error::Result;
use crate::membership::indices_within_capped;
use crate::models::{Circle, Point};

/// Covers `points` with capacity-bounded circles, seeding sampling from
/// `config.seed`.
///
/// See [`cover_with_rng`].
///
/// # Examples
///
/// ```
/// use u_territory::covering::{cover, CoverConfig};
/// use u_territory::models::Point;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0, "E1"),
///     Point::new("b", 0.0, 0.01, "E1"),
///     Point::new("c", 1.0, 1.0, "E1"),
/// ];
/// let config = CoverConfig::default().with_radius(2000.0).with_max_per_circle(5);
/// let circles = cover(&points, &config, "#00FF00", "E1").unwrap();
/// assert_eq!(circles.len(), 2);
/// assert_eq!(circles[0].member_ids(), ["a", "b"]);
/// assert_eq!(circles[1].member_ids(), ["c"]);
/// ```
pub fn cover(points: &[Point], config: &CoverConfig, color: &str, owner: &str) -> Result<Vec<Circle>> {
    let mut rng = config.rng();
    cover_with_rng(points, config, color, owner, &mut rng)
}

/// Covers `points` with circles of at most `config.max_per_circle` members.
///
/// Each pass selects a center over the remaining points, takes the capped
/// membership around it, emits a circle named by its position in this run,
/// and removes the members from the pool. All circles carry the target
/// radius, `color`, and `owner`; the caller is expected to pass only
/// `owner`'s unassigned points.
///
/// Once more than `config.max_circles` circles exist, every remaining point
/// becomes its own single-member circle so the loop always terminates.
///
/// The union of the returned member ids equals the input ids, with no id in
/// two circles. Empty input yields an empty list.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::error::Error::InvalidInput) if the
/// configuration fails [`CoverConfig::validate`].
pub fn cover_with_rng<R: Rng>(
    points: &[Point],
    config: &CoverConfig,
    color: &str,
    owner: &str,
    rng: &mut R,
) -> Result<Vec<Circle>> {
    config.validate()?;
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let radius = config.radius_meters;
    let mut remaining: Vec<Point> = points.to_vec();
    let mut circles: Vec<Circle> = Vec::new();

    while !remaining.is_empty() {
        // A tail batch that already fits the capacity still goes through
        // selection and the capped query, so it may split further.
        let Some(center) = select_center(&remaining, config, rng) else {
            break;
        };
        let mut chosen = indices_within_capped(&remaining, center, radius, config.max_per_circle);
        if chosen.is_empty() {
            chosen.push(0);
        }

        let member_ids: Vec<String> = chosen
            .iter()
            .map(|&i| remaining[i].id().to_string())
            .collect();
        let taken: HashSet<&str> = member_ids.iter().map(String::as_str).collect();
        remaining.retain(|p| !taken.contains(p.id()));

        let name = circle_name(config.naming, circles.len());
        log::debug!(
            "covering: circle {name} at ({:.5}, {:.5}) takes {} points, {} left",
            center.lat,
            center.lon,
            member_ids.len(),
            remaining.len()
        );
        circles.push(Circle::new(name, center, radius, color, owner, member_ids));

        if circles.len() > config.max_circles && !remaining.is_empty() {
            log::warn!(
                "covering: owner {owner} exceeded {} circles, flushing {} remaining points as single-point circles",
                config.max_circles,
                remaining.len()
            );
            for p in remaining.drain(..) {
                let name = circle_name(config.naming, circles.len());
                circles.push(Circle::new(
                    name,
                    p.coordinate(),
                    radius,
                    color,
                    owner,
                    vec![p.id().to_string()],
                ));
            }
        }
    }

    log::info!(
        "covering: owner {owner} points={} circles={}",
        points.len(),
        circles.len()
    );
    Ok(circles)
}

/// Covers every owner's unassigned points.
///
/// Points are grouped by owner in first-encounter order. Ids already
/// members of one of that owner's `existing` circles are skipped. Each group
/// is covered with [`cover_with_rng`] using the owner's palette color
/// ([`palette_color`] by group position), sharing one random source seeded
/// from `config`. Returns only the new circles.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn cover_by_owner(points: &[Point], existing: &[Circle], config: &CoverConfig) -> Result<Vec<Circle>> {
    config.validate()?;
    let mut rng = config.rng();

    let mut groups: Vec<(&str, Vec<Point>)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for p in points {
        let idx = *slot.entry(p.owner()).or_insert_with(|| {
            groups.push((p.owner(), Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(p.clone());
    }

    let mut out = Vec::new();
    for (idx, (owner, group)) in groups.into_iter().enumerate() {
        let assigned: HashSet<&str> = existing
            .iter()
            .filter(|c| c.owner() == owner)
            .flat_map(|c| c.member_ids().iter().map(String::as_str))
            .collect();
        let unassigned: Vec<Point> = group
            .into_iter()
            .filter(|p| !assigned.contains(p.id()))
            .collect();
        if unassigned.is_empty() {
            log::info!("covering: owner {owner} has no unassigned points");
            continue;
        }
        let circles = cover_with_rng(&unassigned, config, palette_color(idx), owner, &mut rng)?;
        out.extend(circles);
    }
    Ok(out)
}

fn circle_name(naming: Naming, index: usize) -> String {
    match naming {
        Naming::Numeric => numeric_name(index),
        Naming::Alphabetical => alphabetical_name(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(radius: f64, cap: usize) -> CoverConfig {
        CoverConfig::default()
            .with_radius(radius)
            .with_max_per_circle(cap)
            .with_seed(42)
    }

    fn all_ids(circles: &[Circle]) -> Vec<String> {
        let mut ids: Vec<String> = circles.iter().flat_map(|c| c.member_ids().to_vec()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_cover_empty() {
        let circles = cover(&[], &config(2000.0, 5), "#000", "E1").expect("valid");
        assert!(circles.is_empty());
    }

    #[test]
    fn test_cover_invalid_config() {
        let pts = vec![Point::new("a", 0.0, 0.0, "E1")];
        assert!(cover(&pts, &config(0.0, 5), "#000", "E1").is_err());
        assert!(cover(&pts, &config(100.0, 0), "#000", "E1").is_err());
    }

    #[test]
    fn test_cover_near_and_far() {
        let pts = vec![
            Point::new("m1", 0.0, 0.0, "E1"),
            Point::new("m2", 0.0, 0.01, "E1"),
            Point::new("m3", 1.0, 1.0, "E1"),
        ];
        let circles = cover(&pts, &config(2000.0, 5), "#00FF00", "E1").expect("valid");
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].name(), "1");
        assert_eq!(circles[0].member_ids(), ["m1", "m2"]);
        assert_eq!(circles[1].name(), "2");
        assert_eq!(circles[1].member_ids(), ["m3"]);
        for c in &circles {
            assert_eq!(c.radius_meters(), 2000.0);
            assert_eq!(c.color(), "#00FF00");
            assert_eq!(c.owner(), "E1");
            assert_eq!(c.visit_order(), None);
        }
    }

    #[test]
    fn test_cover_dense_cluster_fills_capacity() {
        let pts: Vec<Point> = (0..150)
            .map(|i| {
                let dlat = (i % 10) as f64 * 5e-6;
                let dlon = (i / 10) as f64 * 5e-6;
                Point::new(format!("p{i}"), 12.0 + dlat, 77.0 + dlon, "E1")
            })
            .collect();
        let circles = cover(&pts, &config(2000.0, 10), "#000", "E1").expect("valid");
        assert_eq!(circles.len(), 15);
        assert!(circles.iter().all(|c| c.member_count() == 10));
        let names: Vec<&str> = circles.iter().map(Circle::name).collect();
        assert_eq!(names.first(), Some(&"1"));
        assert_eq!(names.last(), Some(&"15"));
        assert_eq!(all_ids(&circles).len(), 150);
    }

    #[test]
    fn test_cover_tiny_radius_falls_back_to_singletons() {
        let pts: Vec<Point> = (0..6)
            .map(|i| Point::new(format!("p{i}"), 0.0, i as f64 * 0.1, "E1"))
            .collect();
        let circles = cover(&pts, &config(1.0, 3), "#000", "E1").expect("valid");
        assert_eq!(circles.len(), 6);
        assert!(circles.iter().all(|c| c.member_count() == 1));
        assert_eq!(all_ids(&circles).len(), 6);
    }

    #[test]
    fn test_cover_runaway_flush() {
        // Four distant clusters of five; capacity two, limit one circle
        let mut pts = Vec::new();
        for k in 0..4 {
            for i in 0..5 {
                pts.push(Point::new(
                    format!("k{k}_{i}"),
                    k as f64,
                    i as f64 * 1e-4,
                    "E1",
                ));
            }
        }
        let cfg = config(5000.0, 2).with_max_circles(1);
        let circles = cover(&pts, &cfg, "#000", "E1").expect("valid");
        assert_eq!(circles.len(), 18);
        assert_eq!(circles[0].member_count(), 2);
        assert_eq!(circles[1].member_count(), 2);
        assert!(circles[2..].iter().all(|c| c.member_count() == 1));
        assert_eq!(circles[17].name(), "18");

        let mut ids = all_ids(&circles);
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_cover_alphabetical_names() {
        let pts: Vec<Point> = (0..3)
            .map(|i| Point::new(format!("p{i}"), i as f64, 0.0, "E1"))
            .collect();
        let cfg = config(100.0, 1).with_naming(Naming::Alphabetical);
        let circles = cover(&pts, &cfg, "#000", "E1").expect("valid");
        let names: Vec<&str> = circles.iter().map(Circle::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_cover_with_rng_reproducible() {
        let pts: Vec<Point> = (0..60)
            .map(|i| Point::new(format!("p{i}"), (i % 7) as f64 * 0.01, (i % 11) as f64 * 0.01, "E1"))
            .collect();
        let cfg = config(1500.0, 4);
        let a = cover_with_rng(&pts, &cfg, "#000", "E1", &mut StdRng::seed_from_u64(5)).expect("valid");
        let b = cover_with_rng(&pts, &cfg, "#000", "E1", &mut StdRng::seed_from_u64(5)).expect("valid");
        assert_eq!(a, b);
        assert!(a.iter().all(|c| c.member_count() <= 4));
        assert_eq!(all_ids(&a).len(), 60);
    }

    #[test]
    fn test_cover_by_owner_groups_and_skips_assigned() {
        let pts = vec![
            Point::new("a1", 0.0, 0.0, "A"),
            Point::new("b1", 5.0, 5.0, "B"),
            Point::new("a2", 0.0, 0.001, "A"),
            Point::new("b2", 5.0, 5.001, "B"),
        ];
        let existing = vec![Circle::new(
            "1",
            pts[1].coordinate(),
            500.0,
            "#000",
            "B",
            vec!["b1".to_string()],
        )];
        let circles = cover_by_owner(&pts, &existing, &config(1000.0, 5)).expect("valid");
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].owner(), "A");
        assert_eq!(circles[0].member_ids(), ["a1", "a2"]);
        assert_eq!(circles[0].color(), palette_color(0));
        assert_eq!(circles[1].owner(), "B");
        assert_eq!(circles[1].member_ids(), ["b2"]);
        assert_eq!(circles[1].color(), palette_color(1));
        assert_eq!(circles[1].name(), "1");
    }

    #[test]
    fn test_cover_by_owner_all_assigned() {
        let pts = vec![Point::new("a1", 0.0, 0.0, "A")];
        let existing = vec![Circle::new(
            "1",
            pts[0].coordinate(),
            500.0,
            "#000",
            "A",
            vec!["a1".to_string()],
        )];
        let circles = cover_by_owner(&pts, &existing, &config(1000.0, 5)).expect("valid");
        assert!(circles.is_empty());
    }
}
