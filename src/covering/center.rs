//! Circle center selection.
//!
//! Choosing the center that covers the most points is a maximum-coverage
//! placement problem. Small sets are searched exhaustively over the
//! centroid and every input point; larger sets score a random sample of
//! candidates, trading optimality for O(sample × n) work.

use rand::Rng;

use super::CoverConfig;
use crate::membership::indices_within;
use crate::models::{Coordinate, Point};

/// Proposes a center for the next circle over `points`.
///
/// - 0 points: `None`; callers must guard.
/// - 1 point: that point's coordinates.
/// - Up to `exhaustive_threshold` points: candidates are the centroid
///   followed by every point, in input order.
/// - More: the centroid followed by `min(sample_size, n) - 1` points drawn
///   uniformly without replacement.
///
/// Each candidate is scored by how many points lie within
/// `config.radius_meters`; the highest score wins, with ties going to the
/// earliest candidate (so the centroid is preferred). Small inputs never
/// touch `rng`, making the result deterministic.
///
/// # Examples
///
/// ```
/// use u_territory::covering::{select_center, CoverConfig};
/// use u_territory::models::{Coordinate, Point};
///
/// let config = CoverConfig::default().with_radius(2000.0);
/// let mut rng = config.rng();
/// let points = vec![
///     Point::new("a", 0.0, 0.0, "E1"),
///     Point::new("b", 0.0, 0.01, "E1"),
///     Point::new("c", 1.0, 1.0, "E1"),
/// ];
/// // The centroid covers nothing; the first point covers itself and "b".
/// let center = select_center(&points, &config, &mut rng);
/// assert_eq!(center, Some(Coordinate::new(0.0, 0.0)));
/// ```
pub fn select_center<R: Rng>(
    points: &[Point],
    config: &CoverConfig,
    rng: &mut R,
) -> Option<Coordinate> {
    let n = points.len();
    match n {
        0 => return None,
        1 => return Some(points[0].coordinate()),
        _ => {}
    }

    let centroid = Coordinate::mean(points.iter().map(Point::coordinate))?;

    let picks: Vec<usize> = if n <= config.exhaustive_threshold {
        (0..n).collect()
    } else {
        let extra = config.sample_size.min(n).saturating_sub(1);
        sample_indices(n, extra, rng)
    };

    let mut best = centroid;
    let mut best_score = coverage(points, centroid, config.radius_meters);
    for i in picks {
        let candidate = points[i].coordinate();
        let score = coverage(points, candidate, config.radius_meters);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    Some(best)
}

fn coverage(points: &[Point], center: Coordinate, radius_meters: f64) -> usize {
    indices_within(points, center, radius_meters).len()
}

/// Draws `amount` distinct indices from `0..n` via a partial Fisher-Yates
/// shuffle, in draw order.
fn sample_indices<R: Rng>(n: usize, amount: usize, rng: &mut R) -> Vec<usize> {
    let amount = amount.min(n);
    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..amount {
        let j = rng.random_range(i as u64..n as u64) as usize;
        pool.swap(i, j);
    }
    pool.truncate(amount);
    pool
}
