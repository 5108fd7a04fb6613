//! Dataset generation configuration
//!
//! One matchup is a randomly drawn attacker/defender pair; each matchup is
//! fought `smooth_size` times with fresh battle seeds and only the
//! mean/standard deviation of the outcomes lands in the dataset.

use crate::core::error::{CrucibleError, Result};

/// Configuration for one dataset generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of matchups in the generated dataset.
    pub dataset_size: u32,

    /// Battles fought per matchup. The standard deviation divides by
    /// `smooth_size - 1`, so at least 2 is required.
    pub smooth_size: u32,

    /// Largest unit count a single group can be rolled with.
    pub max_ships: u32,

    /// Largest technology level a combatant can be rolled with.
    pub max_tech: u8,

    /// Worker threads; 0 means one per available core.
    pub num_threads: usize,

    /// Master seed for matchup generation and battle seeds.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dataset_size: 1000,
            smooth_size: 100,
            max_ships: 10_000,
            max_tech: 30,
            num_threads: 0,
            seed: 1,
        }
    }
}

impl GeneratorConfig {
    /// Validate configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.dataset_size == 0 {
            return Err(CrucibleError::InvalidConfig(
                "dataset_size must be at least 1".into(),
            ));
        }
        if self.smooth_size < 2 {
            return Err(CrucibleError::InvalidConfig(
                "smooth_size must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_smooth_size_of_one_is_rejected() {
        let config = GeneratorConfig {
            smooth_size: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let config = GeneratorConfig {
            dataset_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
