//! Point, coordinate, and bounding-box types.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_distance;

/// Map center used when there is nothing to average.
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    lat: 40.7128,
    lon: -74.0060,
};

/// Approximate meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_000.0;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use u_territory::models::Coordinate;
///
/// let mean = Coordinate::mean([Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 4.0)]);
/// assert_eq!(mean, Some(Coordinate::new(1.0, 2.0)));
/// assert_eq!(Coordinate::mean(Vec::<Coordinate>::new()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in meters to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// Returns `true` if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Arithmetic mean of the given coordinates, `None` when empty.
    pub fn mean<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut count = 0usize;
        let (mut lat, mut lon) = (0.0, 0.0);
        for c in coords {
            lat += c.lat;
            lon += c.lon;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Self::new(lat / count as f64, lon / count as f64))
    }
}

/// A geolocated entity to be covered, owned by one agent.
///
/// Points are immutable once built; the covering code only reads and
/// partitions point sets.
///
/// # Examples
///
/// ```
/// use u_territory::models::Point;
///
/// let p = Point::new("M001", 12.97, 77.59, "E1");
/// assert_eq!(p.id(), "M001");
/// assert_eq!(p.owner(), "E1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: String,
    lat: f64,
    lon: f64,
    owner: String,
}

impl Point {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            owner: owner.into(),
        }
    }

    /// Identifier, unique within a point set.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Agent this point belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Great-circle distance in meters to a coordinate.
    pub fn distance_to(&self, target: &Coordinate) -> f64 {
        haversine_distance(target.lat, target.lon, self.lat, self.lon)
    }
}

/// Center for a map showing `points`: their mean location, or
/// [`DEFAULT_MAP_CENTER`] when there are none.
pub fn map_center(points: &[Point]) -> Coordinate {
    Coordinate::mean(points.iter().map(Point::coordinate)).unwrap_or(DEFAULT_MAP_CENTER)
}

/// Approximate latitude/longitude box enclosing a circle.
///
/// Uses the flat approximation 1° ≈ 111 km, with longitude scaled by the
/// cosine of the center latitude. Longitude span saturates at 180° near
/// the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Bounding box of a circle of `radius_meters` around `center`.
    pub fn around(center: Coordinate, radius_meters: f64) -> Self {
        let lat_delta = radius_meters / METERS_PER_DEGREE;
        let cos_lat = center.lat.to_radians().cos();
        let lon_delta = if cos_lat > f64::EPSILON {
            (radius_meters / (METERS_PER_DEGREE * cos_lat)).min(180.0)
        } else {
            180.0
        };
        Self {
            north: center.lat + lat_delta,
            south: center.lat - lat_delta,
            east: center.lon + lon_delta,
            west: center.lon - lon_delta,
        }
    }

    /// Returns `true` if `coord` lies inside the box (edges inclusive).
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lat >= self.south
            && coord.lat <= self.north
            && coord.lon >= self.west
            && coord.lon <= self.east
    }
}
