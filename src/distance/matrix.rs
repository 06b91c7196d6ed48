//! Dense great-circle distance matrix.

use super::DistanceFrom;
use crate::models::Coordinate;

/// A dense n×n distance matrix (meters) stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_territory::models::Coordinate;
/// use u_territory::distance::DistanceMatrix;
///
/// let stops = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 0.01),
///     Coordinate::new(0.0, 0.05),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&stops);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 1111.95).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes haversine distances between every pair of coordinates.
    pub fn from_coordinates(coords: &[Coordinate]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            let from = DistanceFrom::new(coords[i]);
            for j in (i + 1)..n {
                let d = from.to(coords[j].lat, coords[j].lon);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the position in `candidates` of the one nearest to `from`.
    ///
    /// Ties resolve to the earliest candidate. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &c) in candidates.iter().enumerate() {
            let d = self.get(from, c);
            let closer = match best {
                Some((_, bd)) => d < bd,
                None => true,
            };
            if closer {
                best = Some((pos, d));
            }
        }
        best.map(|(pos, _)| pos)
    }
}
