//! Scoring configuration.

use serde::{Deserialize, Serialize};

use squadforge_catalog::Role;

/// A buff the team should cover, with its relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffRequirement {
    pub id: String,
    pub weight: f32,
}

/// A role the team should fill, with its relative weight and the number
/// of members that should hold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub role: Role,
    pub weight: f32,
    pub required: u32,
}

/// Penalty applied when too many members share one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePenalty {
    /// Copies of one archetype tolerated before the penalty kicks in.
    pub threshold: u32,
    /// Penalty per copy beyond the threshold.
    pub penalty_per_extra: f32,
    /// Share of the total score the penalty is scaled by.
    pub weight: f32,
}

impl Default for DuplicatePenalty {
    fn default() -> Self {
        DuplicatePenalty {
            threshold: 2,
            penalty_per_extra: 1.0,
            weight: 0.1,
        }
    }
}

/// Everything the scorer needs to judge a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Free-form play-style label carried through to reports.
    #[serde(default)]
    pub play_style: Option<String>,
    #[serde(default)]
    pub required_buffs: Vec<BuffRequirement>,
    #[serde(default)]
    pub required_roles: Vec<RoleRequirement>,
    /// Relative weight of the buff component. Normalized against
    /// `role_weight` at scoring time.
    pub buff_weight: f32,
    /// Relative weight of the role component.
    pub role_weight: f32,
    /// Members per subgroup for the diagnostic subgroup coverage.
    #[serde(default = "default_subgroup_size")]
    pub subgroup_size: usize,
    #[serde(default)]
    pub duplicate_penalty: Option<DuplicatePenalty>,
}

fn default_subgroup_size() -> usize {
    2
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            play_style: None,
            required_buffs: vec![],
            required_roles: vec![],
            buff_weight: 0.4,
            role_weight: 0.5,
            subgroup_size: default_subgroup_size(),
            duplicate_penalty: None,
        }
    }
}

impl ScoringConfig {
    /// Buff/role weights normalized to sum 1.0, falling back to an even
    /// split when both are zero.
    #[must_use]
    pub fn normalized_weights(&self) -> (f32, f32) {
        let sum = self.buff_weight + self.role_weight;
        if sum <= 0.0 {
            (0.5, 0.5)
        } else {
            (self.buff_weight / sum, self.role_weight / sum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_normalize_to_one() {
        let config = ScoringConfig::default();
        let (buff, role) = config.normalized_weights();
        assert!((buff + role - 1.0).abs() < 1e-6);
        assert!((buff - 0.4 / 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_zero_weights_fall_back_to_even_split() {
        let config = ScoringConfig {
            buff_weight: 0.0,
            role_weight: 0.0,
            ..ScoringConfig::default()
        };
        assert_eq!(config.normalized_weights(), (0.5, 0.5));
    }

    #[test]
    fn test_config_json_defaults() {
        let config: ScoringConfig = serde_json::from_str(
            r#"{"buff_weight": 0.4, "role_weight": 0.6}"#,
        )
        .unwrap();
        assert_eq!(config.subgroup_size, 2);
        assert!(config.required_buffs.is_empty());
        assert!(config.duplicate_penalty.is_none());
    }
}
