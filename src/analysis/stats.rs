//! Aggregate coverage statistics.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::overlap::overlap;
use crate::models::{Circle, Point};

/// Summary of how a point set is covered by a circle collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub total_points: usize,
    pub total_circles: usize,
    /// Points of the set that are a member of at least one circle.
    pub assigned_points: usize,
    pub unassigned_points: usize,
    /// `assigned / total × 100`, zero for an empty point set.
    pub assignment_percentage: f64,
    pub mean_circle_size: f64,
    pub min_circle_size: usize,
    pub max_circle_size: usize,
    /// Population standard deviation of circle sizes.
    pub circle_size_std: f64,
    pub mean_radius_meters: f64,
    /// Points claimed by more than one circle.
    pub overlapping_points: usize,
    /// Sum of member counts per owner.
    pub owner_workloads: BTreeMap<String, usize>,
    pub total_owners: usize,
}

/// Computes [`CoverageStats`] for `circles` over `points`.
///
/// Member ids that do not name a point in `points` are not counted as
/// assigned. Size and radius figures are zero when there are no circles.
///
/// # Examples
///
/// ```
/// use u_territory::analysis::coverage_stats;
/// use u_territory::models::{Circle, Coordinate, Point};
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0, "E1"),
///     Point::new("b", 0.0, 0.0, "E1"),
///     Point::new("c", 0.0, 0.0, "E1"),
///     Point::new("d", 0.0, 0.0, "E1"),
/// ];
/// let circles = vec![Circle::new("1", Coordinate::default(), 500.0, "#000", "E1",
///                                vec!["a".into(), "b".into(), "c".into()])];
/// let stats = coverage_stats(&circles, &points);
/// assert_eq!(stats.assigned_points, 3);
/// assert_eq!(stats.unassigned_points, 1);
/// assert!((stats.assignment_percentage - 75.0).abs() < 1e-10);
/// ```
pub fn coverage_stats(circles: &[Circle], points: &[Point]) -> CoverageStats {
    let point_ids: HashSet<&str> = points.iter().map(Point::id).collect();
    let assigned: HashSet<&str> = circles
        .iter()
        .flat_map(|c| c.member_ids().iter().map(String::as_str))
        .filter(|id| point_ids.contains(id))
        .collect();

    let total_points = points.len();
    let assigned_points = assigned.len();
    let assignment_percentage = if total_points > 0 {
        assigned_points as f64 / total_points as f64 * 100.0
    } else {
        0.0
    };

    let sizes: Vec<usize> = circles.iter().map(Circle::member_count).collect();
    let (mean_circle_size, circle_size_std) = mean_and_std(&sizes);
    let mean_radius_meters = if circles.is_empty() {
        0.0
    } else {
        circles.iter().map(Circle::radius_meters).sum::<f64>() / circles.len() as f64
    };

    let owner_workloads = owner_workloads(circles);
    CoverageStats {
        total_points,
        total_circles: circles.len(),
        assigned_points,
        unassigned_points: total_points.saturating_sub(assigned_points),
        assignment_percentage,
        mean_circle_size,
        min_circle_size: sizes.iter().copied().min().unwrap_or(0),
        max_circle_size: sizes.iter().copied().max().unwrap_or(0),
        circle_size_std,
        mean_radius_meters,
        overlapping_points: overlap(circles).len(),
        total_owners: owner_workloads.len(),
        owner_workloads,
    }
}

/// Sum of member counts per circle owner.
pub fn owner_workloads(circles: &[Circle]) -> BTreeMap<String, usize> {
    let mut loads: BTreeMap<String, usize> = BTreeMap::new();
    for c in circles {
        *loads.entry(c.owner().to_string()).or_default() += c.member_count();
    }
    loads
}

fn mean_and_std(values: &[usize]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}
