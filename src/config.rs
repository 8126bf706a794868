//! Unified configuration for track generation.
//!
//! All tunable parameters for the sampler, the ring orderer and the path
//! search live in one struct so the binaries and tests can tweak them
//! in one place.

use crate::error::TrackError;

/// Complete configuration for one track generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    // ===== Grid =====
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Random seed used by [`crate::generate_track`].
    pub seed: u64,

    // ===== Waypoints =====
    /// Number of waypoints per track.
    pub point_count: usize,
    /// Fraction of the grid the sampler draws from before pushing
    /// coordinates outward (lower = waypoints hug the border more).
    pub center_bias: f64,
    /// Minimum waypoint distance as a fraction of `grid_size`.
    pub min_separation: f64,

    // ===== Budgets =====
    /// Retry budget shared by sampling, ordering and whole-pipeline retries.
    pub max_retries: usize,
    /// Allowed ring crossings and deliberate path crossings.
    pub max_crossings: usize,

    // ===== Path search =====
    /// Cap on consecutive moves in the same direction.
    pub max_straight: u32,
    /// Probability that the search frontier is shuffled instead of sorted
    /// on an insertion.
    pub randomness: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            seed: 12345,

            point_count: 4,
            center_bias: 0.6,
            min_separation: 0.2,

            max_retries: 1000,
            max_crossings: 0,

            max_straight: 3,
            randomness: 0.5,
        }
    }
}

impl TrackConfig {
    /// Create config with custom seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Default::default() }
    }

    /// Smaller retry budget so failing tests finish quickly.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            max_retries: 200,
            ..Default::default()
        }
    }

    pub fn with_grid(mut self, grid_size: usize, point_count: usize) -> Self {
        self.grid_size = grid_size;
        self.point_count = point_count;
        self
    }

    pub fn with_search_params(mut self, max_straight: u32, randomness: f64) -> Self {
        self.max_straight = max_straight;
        self.randomness = randomness;
        self
    }

    pub fn with_crossings(mut self, max_crossings: usize) -> Self {
        self.max_crossings = max_crossings;
        self
    }

    /// Reject parameter combinations the generator cannot work with.
    pub fn validate(&self) -> Result<(), TrackError> {
        if self.grid_size == 0 {
            return Err(TrackError::InvalidConfig("grid_size must be positive".into()));
        }
        if self.grid_size > i32::MAX as usize {
            return Err(TrackError::InvalidConfig(format!(
                "grid_size {} does not fit grid coordinates",
                self.grid_size
            )));
        }
        if !(self.center_bias > 0.0 && self.center_bias <= 1.0) {
            return Err(TrackError::InvalidConfig(format!(
                "center_bias {} outside (0, 1]",
                self.center_bias
            )));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(TrackError::InvalidConfig(format!(
                "randomness {} outside [0, 1]",
                self.randomness
            )));
        }
        if !(self.min_separation >= 0.0) {
            return Err(TrackError::InvalidConfig(format!(
                "min_separation {} must be non-negative",
                self.min_separation
            )));
        }
        if self.max_retries == 0 {
            return Err(TrackError::InvalidConfig("max_retries must be positive".into()));
        }
        Ok(())
    }
}

/// Presets for common track styles.
pub mod presets {
    use super::TrackConfig;

    /// Small grid, few waypoints.
    pub fn compact(seed: u64) -> TrackConfig {
        TrackConfig {
            seed,
            grid_size: 8,
            point_count: 3,
            ..Default::default()
        }
    }

    /// Large grid with long straights.
    pub fn sprawling(seed: u64) -> TrackConfig {
        TrackConfig {
            seed,
            grid_size: 20,
            point_count: 6,
            max_straight: 6,
            randomness: 0.3,
            ..Default::default()
        }
    }

    /// Short straights and a noisy frontier.
    pub fn twisty(seed: u64) -> TrackConfig {
        TrackConfig {
            seed,
            grid_size: 14,
            point_count: 5,
            max_straight: 2,
            randomness: 0.8,
            ..Default::default()
        }
    }

    /// Allows the track to cross itself once.
    pub fn crossover(seed: u64) -> TrackConfig {
        TrackConfig {
            seed,
            grid_size: 12,
            point_count: 5,
            max_crossings: 1,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TrackConfig::default().validate().is_ok());
        assert!(presets::compact(1).validate().is_ok());
        assert!(presets::sprawling(1).validate().is_ok());
        assert!(presets::twisty(1).validate().is_ok());
        assert!(presets::crossover(1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            TrackConfig { grid_size: 0, ..Default::default() },
            TrackConfig { center_bias: 0.0, ..Default::default() },
            TrackConfig { center_bias: 1.5, ..Default::default() },
            TrackConfig { randomness: -0.1, ..Default::default() },
            TrackConfig { randomness: f64::NAN, ..Default::default() },
            TrackConfig { min_separation: f64::NAN, ..Default::default() },
            TrackConfig { max_retries: 0, ..Default::default() },
        ];
        for config in &bad {
            assert!(
                matches!(config.validate(), Err(TrackError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_builders() {
        let config = TrackConfig::with_seed(7)
            .with_grid(16, 6)
            .with_search_params(4, 0.25)
            .with_crossings(2);
        assert_eq!(config.seed, 7);
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.point_count, 6);
        assert_eq!(config.max_straight, 4);
        assert_eq!(config.randomness, 0.25);
        assert_eq!(config.max_crossings, 2);
    }
}
