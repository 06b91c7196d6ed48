//! Splitting an oversized manually placed circle.
//!
//! # Algorithm
//!
//! Members of the original circle are sorted by distance from its center
//! and sliced into capacity-sized chunks, innermost first. Each chunk gets
//! its own circle centered on the chunk centroid, with the radius widened
//! to `max(target, 1.2 × farthest member)` so every chunk member stays
//! inside its circle.

use crate::distance::DistanceFrom;
use crate::error::{Error, Result};
use crate::models::{Circle, Coordinate, Point};

/// Safety margin applied to the farthest chunk member.
const RADIUS_MARGIN: f64 = 1.2;

/// Splits `template` into circles of at most `max_per_circle` members.
///
/// Membership is every point of the template's owner within the template's
/// radius. If it fits the capacity, one circle is returned with the
/// template's name, center, and radius. Otherwise chunk `n` (1-based) is
/// named after the template for `n = 1` and `"<name>_Circle_<n>"` after.
/// Color and owner are copied; none of the results is scheduled.
///
/// # Errors
///
/// Returns an error if `max_per_circle` is zero or the template fails
/// [`Circle::validate`].
///
/// # Examples
///
/// ```
/// use u_territory::covering::split_circle;
/// use u_territory::models::{Circle, Coordinate, Point};
///
/// let points: Vec<Point> = (0..5)
///     .map(|i| Point::new(format!("p{i}"), 0.0, i as f64 * 0.001, "E1"))
///     .collect();
/// let template = Circle::new("Monday", Coordinate::new(0.0, 0.0), 1000.0, "#F00", "E1", vec![]);
/// let parts = split_circle(&template, &points, 2).unwrap();
/// let names: Vec<&str> = parts.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["Monday", "Monday_Circle_2", "Monday_Circle_3"]);
/// ```
pub fn split_circle(template: &Circle, points: &[Point], max_per_circle: usize) -> Result<Vec<Circle>> {
    template.validate()?;
    if max_per_circle == 0 {
        return Err(Error::invalid_input("max_per_circle must be at least 1"));
    }

    let center = template.center();
    let radius = template.radius_meters();
    let from = DistanceFrom::new(center);
    let mut members: Vec<(f64, &Point)> = points
        .iter()
        .filter(|p| p.owner() == template.owner())
        .map(|p| (from.to(p.lat(), p.lon()), p))
        .filter(|(d, _)| *d <= radius)
        .collect();

    if members.len() <= max_per_circle {
        let ids = members.iter().map(|(_, p)| p.id().to_string()).collect();
        return Ok(vec![Circle::new(
            template.name(),
            center,
            radius,
            template.color(),
            template.owner(),
            ids,
        )]);
    }

    members.sort_by(|a, b| a.0.total_cmp(&b.0));

    let base = template.name();
    let circles: Vec<Circle> = members
        .chunks(max_per_circle)
        .enumerate()
        .map(|(i, chunk)| {
            let sub_center =
                Coordinate::mean(chunk.iter().map(|(_, p)| p.coordinate())).unwrap_or(center);
            let sub_from = DistanceFrom::new(sub_center);
            let farthest = chunk
                .iter()
                .map(|(_, p)| sub_from.to(p.lat(), p.lon()))
                .fold(0.0, f64::max);
            let name = if i == 0 {
                base.to_string()
            } else {
                format!("{base}_Circle_{}", i + 1)
            };
            let ids = chunk.iter().map(|(_, p)| p.id().to_string()).collect();
            Circle::new(
                name,
                sub_center,
                radius.max(RADIUS_MARGIN * farthest),
                template.color(),
                template.owner(),
                ids,
            )
        })
        .collect();

    log::info!(
        "split: circle {base} with {} members split into {} circles",
        members.len(),
        circles.len()
    );
    Ok(circles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(radius: f64) -> Circle {
        Circle::new("Mon", Coordinate::new(0.0, 0.0), radius, "#123456", "E1", vec![])
    }

    fn line(n: usize, step: f64) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(format!("p{i}"), 0.0, i as f64 * step, "E1"))
            .collect()
    }

    #[test]
    fn test_within_capacity_single_circle() {
        let mut pts = line(3, 0.001);
        pts.push(Point::new("other", 0.0, 0.0, "E2"));
        let out = split_circle(&template(1000.0), &pts, 5).expect("valid");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "Mon");
        assert_eq!(out[0].center(), Coordinate::new(0.0, 0.0));
        assert_eq!(out[0].radius_meters(), 1000.0);
        assert_eq!(out[0].member_ids(), ["p0", "p1", "p2"]);
        assert_eq!(out[0].color(), "#123456");
    }

    #[test]
    fn test_chunks_in_distance_order() {
        let mut pts = line(7, 0.001);
        pts.reverse();
        let out = split_circle(&template(1000.0), &pts, 3).expect("valid");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].member_ids(), ["p0", "p1", "p2"]);
        assert_eq!(out[1].member_ids(), ["p3", "p4", "p5"]);
        assert_eq!(out[2].member_ids(), ["p6"]);
        assert_eq!(out[1].name(), "Mon_Circle_2");
        assert_eq!(out[2].name(), "Mon_Circle_3");
        // Single-member chunk sits on its point with the target radius
        assert_eq!(out[2].center(), pts[0].coordinate());
        assert_eq!(out[2].radius_meters(), 1000.0);
    }

    #[test]
    fn test_every_chunk_covers_its_members() {
        let pts = line(10, 0.0008);
        let out = split_circle(&template(1000.0), &pts, 4).expect("valid");
        for c in &out {
            assert!(c.radius_meters() >= 1000.0);
            for id in c.member_ids() {
                let p = pts.iter().find(|p| p.id() == id).expect("member exists");
                assert!(c.covers(p));
            }
        }
    }

    #[test]
    fn test_radius_expands_for_wide_chunk() {
        let pts = vec![
            Point::new("a", 0.0, -0.008, "E1"),
            Point::new("b", 0.0, 0.008, "E1"),
            Point::new("c", 0.0, 0.0085, "E1"),
        ];
        let out = split_circle(&template(1000.0), &pts, 2).expect("valid");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].member_ids(), ["a", "b"]);
        let half_span = pts[0].distance_to(&Coordinate::new(0.0, 0.0));
        assert!((out[0].radius_meters() - 1.2 * half_span).abs() < 1e-6);
        assert!(out[0].radius_meters() > 1000.0);
    }

    #[test]
    fn test_invalid_input() {
        assert!(split_circle(&template(1000.0), &line(3, 0.001), 0).is_err());
        assert!(split_circle(&template(0.0), &line(3, 0.001), 2).is_err());
    }
}
