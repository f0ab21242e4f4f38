//! The scoring algorithm.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use squadforge_builder::Loadout;
use squadforge_catalog::Role;

use crate::{config::ScoringConfig, team::TeamComposition};

/// Coverage detail for one required buff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffCoverage {
    pub covered: bool,
    /// How many members provide the buff. Diagnostic only: coverage
    /// credit is binary regardless of redundancy.
    pub providers: u32,
    pub weight: f32,
}

/// Coverage detail for one required role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCoverage {
    pub fulfilled: u32,
    pub required: u32,
    /// `min(1, fulfilled / required)`.
    pub coverage: f32,
    pub weight: f32,
}

/// Full scoring output. All scores lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f32,
    pub buff_score: f32,
    pub role_score: f32,
    /// Raw duplicate-archetype penalty before its weight is applied.
    pub duplicate_penalty: f32,
    /// One entry per required buff, including uncovered ones.
    pub buff_breakdown: BTreeMap<String, BuffCoverage>,
    /// One entry per required role, including unfilled ones.
    pub role_breakdown: BTreeMap<Role, RoleCoverage>,
    /// Buffs present within each subgroup, in team order. Diagnostic
    /// only, never folded into `total_score`.
    pub subgroup_coverage: Vec<BTreeSet<String>>,
}

/// Scores a team. See [`score_members`] for the allocation-light variant
/// search loops use.
#[must_use]
pub fn score_team(team: &TeamComposition, config: &ScoringConfig) -> ScoreResult {
    let members: Vec<&Loadout> = team.members.iter().collect();
    score_members(&members, config)
}

/// Scores a team given by reference, without cloning any loadout.
///
/// An empty team scores a perfect 1.0 with empty breakdowns: there is
/// nothing to judge, and the result stays total.
#[must_use]
pub fn score_members(members: &[&Loadout], config: &ScoringConfig) -> ScoreResult {
    if members.is_empty() {
        return ScoreResult {
            total_score: 1.0,
            buff_score: 1.0,
            role_score: 1.0,
            duplicate_penalty: 0.0,
            buff_breakdown: BTreeMap::new(),
            role_breakdown: BTreeMap::new(),
            subgroup_coverage: vec![],
        };
    }

    let (buff_score, buff_breakdown) = buff_coverage(members, config);
    let (role_score, role_breakdown) = role_coverage(members, config);
    let duplicate_penalty = duplicate_penalty(members, config);

    let (buff_weight, role_weight) = config.normalized_weights();
    let penalty_term = config
        .duplicate_penalty
        .as_ref()
        .map_or(0.0, |dp| duplicate_penalty * dp.weight);
    let total_score =
        (buff_weight * buff_score + role_weight * role_score - penalty_term).clamp(0.0, 1.0);

    ScoreResult {
        total_score,
        buff_score,
        role_score,
        duplicate_penalty,
        buff_breakdown,
        role_breakdown,
        subgroup_coverage: subgroup_coverage(members, config.subgroup_size),
    }
}

/// Weighted binary coverage over the required buffs. No requirements
/// means a vacuous 1.0.
fn buff_coverage(
    members: &[&Loadout],
    config: &ScoringConfig,
) -> (f32, BTreeMap<String, BuffCoverage>) {
    let mut breakdown = BTreeMap::new();
    let mut weighted = 0.0_f32;
    let mut weight_sum = 0.0_f32;

    for requirement in &config.required_buffs {
        let providers = u32::try_from(
            members
                .iter()
                .filter(|m| m.provides_buff(&requirement.id))
                .count(),
        )
        .unwrap_or(u32::MAX);
        let covered = providers > 0;
        if covered {
            weighted += requirement.weight;
        }
        weight_sum += requirement.weight;
        breakdown.insert(
            requirement.id.clone(),
            BuffCoverage {
                covered,
                providers,
                weight: requirement.weight,
            },
        );
    }

    let score = if weight_sum > 0.0 {
        (weighted / weight_sum).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (score, breakdown)
}

/// Weighted ratio coverage over the required roles.
fn role_coverage(
    members: &[&Loadout],
    config: &ScoringConfig,
) -> (f32, BTreeMap<Role, RoleCoverage>) {
    let mut counts: BTreeMap<Role, u32> = BTreeMap::new();
    for member in members {
        *counts.entry(member.role).or_insert(0) += 1;
    }

    let mut breakdown = BTreeMap::new();
    let mut weighted = 0.0_f32;
    let mut weight_sum = 0.0_f32;

    for requirement in &config.required_roles {
        let fulfilled = counts.get(&requirement.role).copied().unwrap_or(0);
        #[expect(clippy::cast_precision_loss)]
        let coverage = if requirement.required == 0 {
            1.0
        } else {
            (fulfilled as f32 / requirement.required as f32).min(1.0)
        };
        weighted += requirement.weight * coverage;
        weight_sum += requirement.weight;
        breakdown.insert(
            requirement.role,
            RoleCoverage {
                fulfilled,
                required: requirement.required,
                coverage,
                weight: requirement.weight,
            },
        );
    }

    let score = if weight_sum > 0.0 {
        (weighted / weight_sum).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (score, breakdown)
}

/// Raw duplicate-archetype penalty: copies beyond the threshold, each
/// costing `penalty_per_extra`.
fn duplicate_penalty(members: &[&Loadout], config: &ScoringConfig) -> f32 {
    let Some(dp) = &config.duplicate_penalty else {
        return 0.0;
    };
    if dp.threshold == 0 || dp.penalty_per_extra <= 0.0 {
        return 0.0;
    }

    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for member in members {
        *counts.entry(member.archetype.as_str()).or_insert(0) += 1;
    }
    #[expect(clippy::cast_precision_loss)]
    let penalty: f32 = counts
        .values()
        .map(|count| count.saturating_sub(dp.threshold) as f32 * dp.penalty_per_extra)
        .sum();
    penalty
}

/// Buffs present in each consecutive chunk of `subgroup_size` members.
/// The final chunk may be smaller.
fn subgroup_coverage(members: &[&Loadout], subgroup_size: usize) -> Vec<BTreeSet<String>> {
    if subgroup_size == 0 {
        return vec![];
    }
    members
        .chunks(subgroup_size)
        .map(|chunk| {
            chunk
                .iter()
                .flat_map(|m| m.provided_buffs.iter().cloned())
                .collect()
        })
        .collect()
}
