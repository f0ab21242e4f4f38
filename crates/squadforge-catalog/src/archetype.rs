use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::entry::WeaponKind;

/// Functional category a loadout fills inside a team.
///
/// Roles drive every heuristic in the build synthesizer (weapon filtering,
/// ability/trait keyword scoring, stat priorities) and the role-coverage
/// part of team scoring.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[display("power_dps")]
    PowerDps,
    #[display("condition_dps")]
    ConditionDps,
    #[display("healer")]
    Healer,
    #[display("quickness_support")]
    QuicknessSupport,
    #[display("alacrity_support")]
    AlacritySupport,
    #[display("tank")]
    Tank,
    #[display("hybrid")]
    Hybrid,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::PowerDps,
        Role::ConditionDps,
        Role::Healer,
        Role::QuicknessSupport,
        Role::AlacritySupport,
        Role::Tank,
        Role::Hybrid,
    ];

    /// Roles whose primary job is dealing damage.
    #[must_use]
    pub fn is_damage(self) -> bool {
        matches!(self, Role::PowerDps | Role::ConditionDps)
    }

    /// Roles that provide team-wide boons (quickness/alacrity style support).
    #[must_use]
    pub fn is_boon_support(self) -> bool {
        matches!(self, Role::QuicknessSupport | Role::AlacritySupport)
    }

    /// Roles that benefit from support-oriented ability categories.
    #[must_use]
    pub fn wants_support_abilities(self) -> bool {
        matches!(self, Role::Healer) || self.is_boon_support()
    }

    /// Roles that benefit from control-oriented ability categories.
    #[must_use]
    pub fn wants_control_abilities(self) -> bool {
        matches!(self, Role::Tank) || self.is_boon_support()
    }
}

/// Error returned when a string is not a recognized role name.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown role: {name}")]
pub struct ParseRoleError {
    pub name: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses the same `snake_case` names used by the serde representation
    /// (`power_dps`, `healer`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.to_string() == s)
            .ok_or_else(|| ParseRoleError {
                name: s.to_owned(),
            })
    }
}

/// A playable character class.
///
/// Immutable catalog data: which weapon categories the class can wield, an
/// optional signature elite specialization, and the roles the class has a
/// natural affinity for (used as hints when assembling candidate pools).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: u32,
    pub name: String,
    /// Weapon categories this archetype can use at all.
    pub weapon_kinds: BTreeSet<WeaponKind>,
    /// Signature elite specialization name, if the catalog designates one.
    #[serde(default)]
    pub elite_specialization: Option<String>,
    /// Roles this archetype is commonly played in.
    #[serde(default)]
    pub role_affinities: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_display_and_from_str() {
        for role in Role::ALL {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown_names() {
        let err = "bard".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("bard"));
    }

    #[test]
    fn test_role_serde_matches_display() {
        let json = serde_json::to_string(&Role::QuicknessSupport).unwrap();
        assert_eq!(json, "\"quickness_support\"");
        assert_eq!(Role::QuicknessSupport.to_string(), "quickness_support");
    }

    #[test]
    fn test_role_category_predicates() {
        assert!(Role::PowerDps.is_damage());
        assert!(Role::ConditionDps.is_damage());
        assert!(!Role::Healer.is_damage());

        assert!(Role::Healer.wants_support_abilities());
        assert!(Role::QuicknessSupport.wants_support_abilities());
        assert!(!Role::PowerDps.wants_support_abilities());

        assert!(Role::Tank.wants_control_abilities());
        assert!(Role::AlacritySupport.wants_control_abilities());
        assert!(!Role::Healer.wants_control_abilities());
    }
}
