//! Search configuration and eager validation.

use serde::{Deserialize, Serialize};

use squadforge_scorer::ScoringConfig;

/// Strategy selection with its per-strategy knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmConfig {
    Sampling {
        samples: usize,
    },
    Genetic {
        population: usize,
        generations: usize,
        #[serde(default = "default_mutation_probability")]
        mutation_probability: f64,
        #[serde(default = "default_tournament_size")]
        tournament_size: usize,
    },
}

fn default_mutation_probability() -> f64 {
    0.2
}

fn default_tournament_size() -> usize {
    3
}

impl AlgorithmConfig {
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmConfig::Sampling { .. } => AlgorithmKind::Sampling,
            AlgorithmConfig::Genetic { .. } => AlgorithmKind::Genetic,
        }
    }
}

/// Which strategy produced an outcome.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    #[display("sampling")]
    Sampling,
    #[display("genetic")]
    Genetic,
}

/// Invalid search configuration, caught before any evaluation starts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("candidate pool is empty")]
    EmptyPool,
    #[display("pool of {pool} candidates cannot fill a team of {team} without duplicates")]
    PoolTooSmall { pool: usize, team: usize },
    #[display("team size must be positive")]
    ZeroTeamSize,
    #[display("population must be positive")]
    ZeroPopulation,
    #[display("generations must be positive")]
    ZeroGenerations,
    #[display("top_n must be positive")]
    ZeroTopN,
}

/// One search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub team_size: usize,
    #[serde(flatten)]
    pub algorithm: AlgorithmConfig,
    pub top_n: usize,
    /// Archetype names the pool may draw from when it is synthesized from
    /// a catalog. Unused for pre-built pools.
    #[serde(default)]
    pub allowed_archetypes: Vec<String>,
    pub scoring: ScoringConfig,
    /// Whether one pool candidate may fill several slots of one team.
    #[serde(default)]
    pub allow_duplicates: bool,
    /// Seed for reproducible runs. Absent means one is drawn from the OS
    /// and reported in the outcome.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Optional wall-clock budget, checked between batches/generations.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
}

impl SearchConfig {
    /// Validates the configuration against a pool of `pool_len`
    /// candidates.
    ///
    /// `samples == 0` is deliberately legal: a sampling run with zero
    /// samples returns an empty result rather than failing.
    pub fn validate(&self, pool_len: usize) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::ZeroTeamSize);
        }
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        if pool_len == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if !self.allow_duplicates && pool_len < self.team_size {
            return Err(ConfigError::PoolTooSmall {
                pool: pool_len,
                team: self.team_size,
            });
        }
        if let AlgorithmConfig::Genetic {
            population,
            generations,
            ..
        } = self.algorithm
        {
            if population == 0 {
                return Err(ConfigError::ZeroPopulation);
            }
            if generations == 0 {
                return Err(ConfigError::ZeroGenerations);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampling_config(team_size: usize, samples: usize) -> SearchConfig {
        SearchConfig {
            team_size,
            algorithm: AlgorithmConfig::Sampling { samples },
            top_n: 3,
            allowed_archetypes: vec![],
            scoring: ScoringConfig::default(),
            allow_duplicates: false,
            seed: None,
            time_budget_ms: None,
        }
    }

    #[test]
    fn test_pool_smaller_than_team_is_rejected() {
        let config = sampling_config(5, 100);
        assert_eq!(
            config.validate(4),
            Err(ConfigError::PoolTooSmall { pool: 4, team: 5 })
        );
    }

    #[test]
    fn test_duplicates_lift_the_pool_size_requirement() {
        let mut config = sampling_config(5, 100);
        config.allow_duplicates = true;
        assert_eq!(config.validate(4), Ok(()));
    }

    #[test]
    fn test_zero_samples_is_valid() {
        let config = sampling_config(5, 0);
        assert_eq!(config.validate(10), Ok(()));
    }

    #[test]
    fn test_genetic_zero_population_is_rejected() {
        let config = SearchConfig {
            algorithm: AlgorithmConfig::Genetic {
                population: 0,
                generations: 10,
                mutation_probability: 0.2,
                tournament_size: 3,
            },
            ..sampling_config(5, 0)
        };
        assert_eq!(config.validate(10), Err(ConfigError::ZeroPopulation));
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let config = sampling_config(5, 100);
        assert_eq!(config.validate(0), Err(ConfigError::EmptyPool));
    }

    #[test]
    fn test_config_json_round_trip_with_flattened_algorithm() {
        let config = SearchConfig {
            algorithm: AlgorithmConfig::Genetic {
                population: 30,
                generations: 20,
                mutation_probability: 0.2,
                tournament_size: 3,
            },
            seed: Some(42),
            ..sampling_config(5, 0)
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"algorithm\":\"genetic\""));
        let restored: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
