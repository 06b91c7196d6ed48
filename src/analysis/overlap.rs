//! Cross-circle overlap detection.
//!
//! A single covering run never assigns a point twice, so any overlap found
//! here comes from separate runs or manual edits.

use std::collections::BTreeMap;

use crate::models::Circle;

/// Maps every member id to the names of the circles containing it, in
/// circle order.
pub fn assignments(circles: &[Circle]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for circle in circles {
        for id in circle.member_ids() {
            map.entry(id.clone())
                .or_default()
                .push(circle.name().to_string());
        }
    }
    map
}

/// Point ids that belong to more than one circle, with the circle names.
///
/// # Examples
///
/// ```
/// use u_territory::analysis::overlap;
/// use u_territory::models::{Circle, Coordinate};
///
/// let ids = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
/// let circles = vec![
///     Circle::new("A", Coordinate::default(), 100.0, "#000", "E1", ids(&["p1", "p2"])),
///     Circle::new("B", Coordinate::default(), 100.0, "#000", "E1", ids(&["p2", "p3"])),
/// ];
/// let shared = overlap(&circles);
/// assert_eq!(shared.len(), 1);
/// assert_eq!(shared["p2"], ["A", "B"]);
/// ```
pub fn overlap(circles: &[Circle]) -> BTreeMap<String, Vec<String>> {
    let mut map = assignments(circles);
    map.retain(|_, names| names.len() > 1);
    map
}
