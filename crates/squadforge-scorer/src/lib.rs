//! Team fitness scoring.
//!
//! Pure functions from a team of loadouts plus a [`ScoringConfig`] to a
//! [`ScoreResult`] in `[0, 1]`: weighted buff coverage (binary per buff),
//! weighted role coverage (ratio against a required count, capped at 1),
//! an optional duplicate-archetype penalty, and diagnostic subgroup
//! coverage. Scoring is total: a team with zero coverage still scores,
//! with the gaps visible in the breakdowns.

pub use self::{
    config::{BuffRequirement, DuplicatePenalty, RoleRequirement, ScoringConfig},
    score::{BuffCoverage, RoleCoverage, ScoreResult, score_members, score_team},
    team::TeamComposition,
};

pub mod config;
pub mod score;
pub mod team;
