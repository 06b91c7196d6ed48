//! Haversine great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · asin(√a)
//! ```
//!
//! `a` is clamped to `[0, 1]` so rounding near antipodal pairs cannot push
//! `asin` out of its domain.

use crate::models::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine terms precomputed for one fixed center.
///
/// Scoring many points against the same center only pays for the center's
/// trigonometry once. [`haversine_distance`] is defined in terms of this
/// type, so batch and scalar results are bit-identical.
///
/// # Examples
///
/// ```
/// use u_territory::distance::{DistanceFrom, haversine_distance};
/// use u_territory::models::Coordinate;
///
/// let from = DistanceFrom::new(Coordinate::new(52.52, 13.405));
/// let d = from.to(48.8566, 2.3522);
/// assert_eq!(d, haversine_distance(52.52, 13.405, 48.8566, 2.3522));
/// assert!((d - 878_000.0).abs() < 10_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFrom {
    lat_rad: f64,
    lon_rad: f64,
    cos_lat: f64,
}

impl DistanceFrom {
    /// Precomputes the terms for `center` (degrees).
    pub fn new(center: Coordinate) -> Self {
        let lat_rad = center.lat.to_radians();
        Self {
            lat_rad,
            lon_rad: center.lon.to_radians(),
            cos_lat: lat_rad.cos(),
        }
    }

    /// Distance in meters from the center to `(lat, lon)` in degrees.
    #[inline]
    pub fn to(&self, lat: f64, lon: f64) -> f64 {
        let lat_rad = lat.to_radians();
        let dlat = lat_rad - self.lat_rad;
        let dlon = lon.to_radians() - self.lon_rad;
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlon / 2.0).sin();
        let a = (s1 * s1 + self.cos_lat * lat_rad.cos() * s2 * s2).clamp(0.0, 1.0);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}

/// Great-circle distance in meters between two points given in degrees.
///
/// Symmetric in its arguments and exactly zero for identical points.
///
/// # Examples
///
/// ```
/// use u_territory::distance::haversine_distance;
///
/// assert_eq!(haversine_distance(10.0, 20.0, 10.0, 20.0), 0.0);
/// // One degree of longitude on the equator is about 111.2 km.
/// let d = haversine_distance(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    DistanceFrom::new(Coordinate::new(lat1, lon1)).to(lat2, lon2)
}

/// Distances in meters from one center to many points, in input order.
///
/// `lats` and `lons` are parallel slices; entries past the shorter one are
/// ignored. Each value equals the corresponding scalar
/// [`haversine_distance`] call with the center as the first point.
pub fn distances_from(lats: &[f64], lons: &[f64], center_lat: f64, center_lon: f64) -> Vec<f64> {
    let from = DistanceFrom::new(Coordinate::new(center_lat, center_lon));
    lats.iter()
        .zip(lons)
        .map(|(&lat, &lon)| from.to(lat, lon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_zero() {
        assert_eq!(haversine_distance(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_distance(-33.9, 151.2, -33.9, 151.2), 0.0);
        assert_eq!(haversine_distance(90.0, 0.0, 90.0, 0.0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (12.97, 77.59, 28.61, 77.21),
            (-45.0, 170.0, 45.0, -170.0),
            (0.0, 0.0, 0.0, 0.01),
        ];
        for (a, b, c, d) in pairs {
            assert_eq!(haversine_distance(a, b, c, d), haversine_distance(c, d, a, b));
        }
    }

    #[test]
    fn test_antipodal() {
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - half_circumference).abs() < 1e-3);
        let d = haversine_distance(90.0, 0.0, -90.0, 0.0);
        assert!((d - half_circumference).abs() < 1e-3);
    }

    #[test]
    fn test_known_distance() {
        // 0.01 degree of longitude on the equator
        let d = haversine_distance(0.0, 0.0, 0.0, 0.01);
        assert!((d - 1111.95).abs() < 0.1);
        // (0,0) to (1,1) is about 157 km
        let d = haversine_distance(0.0, 0.0, 1.0, 1.0);
        assert!((d - 157_249.0).abs() < 100.0);
    }

    #[test]
    fn test_batch_matches_scalar() {
        let lats = [0.0, 10.5, -33.9, 89.9, 12.9716];
        let lons = [0.0, -20.25, 151.2, 179.9, 77.5946];
        let batch = distances_from(&lats, &lons, 12.97, 77.59);
        assert_eq!(batch.len(), 5);
        for i in 0..lats.len() {
            assert_eq!(batch[i], haversine_distance(12.97, 77.59, lats[i], lons[i]));
        }
    }

    #[test]
    fn test_batch_mismatched_lengths() {
        let batch = distances_from(&[0.0, 1.0, 2.0], &[0.0], 0.0, 0.0);
        assert_eq!(batch, vec![0.0]);
        assert!(distances_from(&[], &[], 0.0, 0.0).is_empty());
    }
}
