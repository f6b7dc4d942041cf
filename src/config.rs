//! Engine configuration
//!
//! ```
//! use anti_othello::config::EngineConfig;
//! use anti_othello::search::Recursion;
//!
//! let config = EngineConfig::default()
//!     .with_depth(4)
//!     .with_recursion(Recursion::Alternating);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::board::Opening;
use crate::error::{GameError, GameResult};
use crate::eval::WeightPreset;
use crate::search::{Recursion, SearchParams, DEFAULT_DEPTH, MAX_CHOICES};

/// Deepest search the configuration accepts
pub const MAX_SEARCH_DEPTH: u8 = 16;

/// Default evaluation cache size in slots
pub const DEFAULT_CACHE_SLOTS: usize = 1 << 16;

/// Default time budget per move
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies before root adaptation
    pub max_depth: u8,
    /// Root move count that costs one ply of depth
    pub max_choices: usize,
    pub recursion: Recursion,
    /// Seed of a new game
    pub opening: Opening,
    pub weights: WeightPreset,
    /// Evaluation cache slots; 0 disables the cache
    pub cache_slots: usize,
    /// Searches longer than this are logged as overtime. Never enforced.
    pub time_budget: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            max_choices: MAX_CHOICES,
            recursion: Recursion::default(),
            opening: Opening::default(),
            weights: WeightPreset::default(),
            cache_slots: DEFAULT_CACHE_SLOTS,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices;
        self
    }

    #[must_use]
    pub fn with_recursion(mut self, recursion: Recursion) -> Self {
        self.recursion = recursion;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: WeightPreset) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_cache_slots(mut self, cache_slots: usize) -> Self {
        self.cache_slots = cache_slots;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Check ranges. Depth must be 1..=[`MAX_SEARCH_DEPTH`] and
    /// `max_choices` at least 1.
    pub fn validate(&self) -> GameResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_SEARCH_DEPTH {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "depth must be between 1 and {MAX_SEARCH_DEPTH}, got {}",
                    self.max_depth
                ),
            });
        }
        if self.max_choices == 0 {
            return Err(GameError::InvalidConfig {
                reason: "max choices must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            max_depth: self.max_depth,
            max_choices: self.max_choices,
            recursion: self.recursion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_choices, 8);
        assert_eq!(config.recursion, Recursion::FixedPerspective);
        assert_eq!(config.opening, Opening::Standard);
        assert!(config.validate().is_ok());
        assert_eq!(config.search_params(), SearchParams::default());
    }

    #[test]
    fn test_rejects_zero_depth() {
        let err = EngineConfig::default().with_depth(0).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_rejects_excessive_depth() {
        assert!(EngineConfig::default()
            .with_depth(MAX_SEARCH_DEPTH + 1)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_depth(MAX_SEARCH_DEPTH)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_zero_max_choices() {
        assert!(EngineConfig::default().with_max_choices(0).validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_depth(5)
            .with_max_choices(10)
            .with_recursion(Recursion::Alternating)
            .with_opening(Opening::Empty)
            .with_weights(WeightPreset::Tiered)
            .with_cache_slots(0)
            .with_time_budget(Duration::from_millis(50));

        assert_eq!(config.max_depth, 5);
        assert_eq!(config.max_choices, 10);
        assert_eq!(config.opening, Opening::Empty);
        assert_eq!(config.weights, WeightPreset::Tiered);
        assert_eq!(config.cache_slots, 0);
        assert_eq!(config.time_budget, Duration::from_millis(50));
        assert_eq!(config.search_params().recursion, Recursion::Alternating);
    }
}
