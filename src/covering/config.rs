//! Covering configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How circles produced by one covering run are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Naming {
    /// `1`, `2`, `3`, ...
    #[default]
    Numeric,
    /// `A`, `B`, ..., `Z`, `AA`, `AB`, ...
    Alphabetical,
}

/// Parameters for a covering run.
///
/// # Examples
///
/// ```
/// use u_territory::covering::CoverConfig;
///
/// let config = CoverConfig::default().with_radius(2000.0).with_max_per_circle(5).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(CoverConfig::default().with_max_per_circle(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Target circle radius in meters.
    pub radius_meters: f64,
    /// Maximum points per circle.
    pub max_per_circle: usize,
    /// Candidate centers scored per circle on large point sets, centroid
    /// included.
    pub sample_size: usize,
    /// Point sets up to this size are searched exhaustively.
    pub exhaustive_threshold: usize,
    /// Circle count after which the remaining points are flushed as
    /// single-point circles.
    pub max_circles: usize,
    /// Circle naming scheme.
    pub naming: Naming,
    /// Seed for candidate sampling; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            radius_meters: 10_000.0,
            max_per_circle: 11,
            sample_size: 15,
            exhaustive_threshold: 10,
            max_circles: 100,
            naming: Naming::Numeric,
            seed: None,
        }
    }
}

impl CoverConfig {
    pub fn with_radius(mut self, radius_meters: f64) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_max_per_circle(mut self, max_per_circle: usize) -> Self {
        self.max_per_circle = max_per_circle;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_max_circles(mut self, max_circles: usize) -> Self {
        self.max_circles = max_circles;
        self
    }

    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations the covering loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(Error::invalid_input(format!(
                "radius_meters must be positive, got {}",
                self.radius_meters
            )));
        }
        if self.max_per_circle == 0 {
            return Err(Error::invalid_input("max_per_circle must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(Error::invalid_input("sample_size must be at least 1"));
        }
        Ok(())
    }

    /// Random source for candidate sampling.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
