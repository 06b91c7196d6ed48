//! Circle record: a radius-bounded group of one owner's points.

use serde::{Deserialize, Serialize};

use super::{Bounds, Coordinate, Point};
use crate::error::{Error, Result};
use crate::membership::points_within;

/// A circular coverage region with an owner, a member set, and display
/// attributes.
///
/// `member_count` always equals the number of member ids: every mutator
/// that touches membership updates both. `visit_order` is present only on
/// circles selected for scheduling.
///
/// # Examples
///
/// ```
/// use u_territory::models::{Circle, Coordinate};
///
/// let c = Circle::new("1", Coordinate::new(0.0, 0.0), 2000.0, "#FF0000", "E1",
///                     vec!["M1".to_string(), "M2".to_string()]);
/// assert_eq!(c.member_count(), 2);
/// assert_eq!(c.visit_order(), None);
/// assert!(c.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    name: String,
    center_lat: f64,
    center_lon: f64,
    radius_meters: f64,
    color: String,
    owner: String,
    member_ids: Vec<String>,
    member_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visit_order: Option<u32>,
}

impl Circle {
    /// Creates an unscheduled circle with the given members.
    pub fn new(
        name: impl Into<String>,
        center: Coordinate,
        radius_meters: f64,
        color: impl Into<String>,
        owner: impl Into<String>,
        member_ids: Vec<String>,
    ) -> Self {
        let member_count = member_ids.len();
        Self {
            name: name.into(),
            center_lat: center.lat,
            center_lon: center.lon,
            radius_meters,
            color: color.into(),
            owner: owner.into(),
            member_ids,
            member_count,
            visit_order: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lon)
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Opaque display color, passed through unchanged.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Ids of the points assigned to this circle.
    pub fn member_ids(&self) -> &[String] {
        &self.member_ids
    }

    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// 1-based position in the visit schedule, `None` if not scheduled.
    pub fn visit_order(&self) -> Option<u32> {
        self.visit_order
    }

    /// Returns `true` if `id` is a member of this circle.
    pub fn contains_member(&self, id: &str) -> bool {
        self.member_ids.iter().any(|m| m == id)
    }

    /// Returns `true` if `point` lies within the radius (boundary inclusive).
    ///
    /// This is a geometric test only; it ignores ownership and membership.
    pub fn covers(&self, point: &Point) -> bool {
        point.distance_to(&self.center()) <= self.radius_meters
    }

    /// Approximate bounding box of the circle.
    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center(), self.radius_meters)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Replaces the member set, keeping `member_count` in step.
    pub fn set_members(&mut self, member_ids: Vec<String>) {
        self.member_count = member_ids.len();
        self.member_ids = member_ids;
    }

    pub fn set_visit_order(&mut self, order: u32) {
        self.visit_order = Some(order);
    }

    pub fn clear_visit_order(&mut self) {
        self.visit_order = None;
    }

    /// Moves the circle and re-evaluates membership against `points`.
    pub fn recenter(&mut self, center: Coordinate, points: &[Point]) {
        self.center_lat = center.lat;
        self.center_lon = center.lon;
        self.refresh_members(points);
    }

    /// Changes the radius and re-evaluates membership against `points`.
    pub fn set_radius(&mut self, radius_meters: f64, points: &[Point]) -> Result<()> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(Error::invalid_input(format!(
                "radius must be positive, got {radius_meters}"
            )));
        }
        self.radius_meters = radius_meters;
        self.refresh_members(points);
        Ok(())
    }

    /// Recomputes membership as every point of this circle's owner that lies
    /// within the current radius.
    ///
    /// Points owned by anyone else are ignored, so membership never crosses
    /// owners.
    pub fn refresh_members(&mut self, points: &[Point]) {
        let owned: Vec<Point> = points
            .iter()
            .filter(|p| p.owner() == self.owner)
            .cloned()
            .collect();
        let ids = points_within(&owned, self.center(), self.radius_meters);
        self.set_members(ids);
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_circle("name must be a non-empty string"));
        }
        if !self.center().is_valid() {
            return Err(Error::invalid_circle(format!(
                "center ({}, {}) is out of range",
                self.center_lat, self.center_lon
            )));
        }
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(Error::invalid_circle(format!(
                "radius must be positive, got {}",
                self.radius_meters
            )));
        }
        if self.member_count != self.member_ids.len() {
            return Err(Error::invalid_circle(format!(
                "member_count {} does not match {} member ids",
                self.member_count,
                self.member_ids.len()
            )));
        }
        Ok(())
    }
}
