//! Configuration for a quiz session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Redraws allowed when looking for a team that has not been shown yet.
pub const DEFAULT_MAX_REDRAWS: u32 = 100;

/// Configuration shared by all game modes.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for reproducible sessions; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Bounded retries before the guess mode accepts a repeated team.
    pub max_redraws: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_redraws: DEFAULT_MAX_REDRAWS,
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional RNG seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the redraw bound.
    pub fn with_max_redraws(mut self, max_redraws: u32) -> Self {
        self.max_redraws = max_redraws;
        self
    }

    /// Build the session RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_redraws, 100);
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default().with_seed(9).with_max_redraws(3);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.max_redraws, 3);
        assert_eq!(cfg.with_optional_seed(None).seed, None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = QuizConfig::default().with_seed(42);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
