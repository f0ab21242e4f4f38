//! The assembled build value type.

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use squadforge_catalog::{
    AbilityEntry, Attribute, EquipmentSlot, ItemEntry, Role, SpecializationEntry, TraitEntry,
    WeaponEntry, WeaponKind,
};

/// One equipped weapon configuration: either a single two-handed weapon or
/// a main-hand weapon with an optional off-hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSet {
    pub main_hand: WeaponEntry,
    #[serde(default)]
    pub off_hand: Option<WeaponEntry>,
}

impl WeaponSet {
    /// Weapon kinds present in this set.
    pub fn kinds(&self) -> impl Iterator<Item = WeaponKind> + '_ {
        std::iter::once(self.main_hand.kind).chain(self.off_hand.as_ref().map(|w| w.kind))
    }
}

/// Selected heal/utility/elite abilities. Any slot may be unfilled when
/// the catalog offers no candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityPicks {
    #[serde(default)]
    pub heal: Option<AbilityEntry>,
    #[serde(default)]
    pub utilities: ArrayVec<AbilityEntry, 3>,
    #[serde(default)]
    pub elite: Option<AbilityEntry>,
}

/// A selected specialization line with at most one trait per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationPick {
    pub specialization: SpecializationEntry,
    #[serde(default)]
    pub traits: ArrayVec<TraitEntry, 3>,
}

/// A complete synthesized build for one team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub archetype: String,
    #[serde(default)]
    pub elite_specialization: Option<String>,
    pub role: Role,
    /// Up to two weapon configurations.
    pub weapon_sets: ArrayVec<WeaponSet, 2>,
    #[serde(default)]
    pub abilities: AbilityPicks,
    /// Up to three specialization lines with their trait picks.
    #[serde(default)]
    pub specializations: Vec<SpecializationPick>,
    /// Best item per filled equipment slot; slots with no usable item are
    /// simply absent.
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, ItemEntry>,
    /// Attributes this build values, most important first.
    #[serde(default)]
    pub stat_priority: Vec<Attribute>,
    /// Buff identifiers this build contributes to its team.
    #[serde(default)]
    pub provided_buffs: BTreeSet<String>,
}

impl Loadout {
    /// All weapon kinds across both weapon sets.
    #[must_use]
    pub fn weapon_kinds(&self) -> BTreeSet<WeaponKind> {
        self.weapon_sets.iter().flat_map(WeaponSet::kinds).collect()
    }

    /// Whether this build provides the given buff.
    #[must_use]
    pub fn provides_buff(&self, buff: &str) -> bool {
        self.provided_buffs.contains(buff)
    }
}

#[cfg(test)]
mod tests {
    use squadforge_catalog::WeaponHand;

    use super::*;

    fn weapon(id: u32, kind: WeaponKind, hand: WeaponHand) -> WeaponEntry {
        WeaponEntry {
            id,
            name: format!("weapon-{id}"),
            kind,
            hand,
            archetypes: vec![],
            requires_specialization: None,
        }
    }

    fn sample_loadout() -> Loadout {
        let mut weapon_sets = ArrayVec::new();
        weapon_sets.push(WeaponSet {
            main_hand: weapon(1, WeaponKind::Sword, WeaponHand::MainHand),
            off_hand: Some(weapon(2, WeaponKind::Focus, WeaponHand::OffHand)),
        });
        weapon_sets.push(WeaponSet {
            main_hand: weapon(3, WeaponKind::Greatsword, WeaponHand::TwoHanded),
            off_hand: None,
        });
        Loadout {
            archetype: "warden".to_owned(),
            elite_specialization: None,
            role: Role::PowerDps,
            weapon_sets,
            abilities: AbilityPicks::default(),
            specializations: vec![],
            equipment: BTreeMap::new(),
            stat_priority: vec![Attribute::Power, Attribute::Precision],
            provided_buffs: ["might".to_owned()].into_iter().collect(),
        }
    }

    #[test]
    fn test_weapon_kinds_span_both_sets() {
        let loadout = sample_loadout();
        let kinds = loadout.weapon_kinds();
        assert_eq!(
            kinds,
            [WeaponKind::Sword, WeaponKind::Focus, WeaponKind::Greatsword]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn test_provides_buff() {
        let loadout = sample_loadout();
        assert!(loadout.provides_buff("might"));
        assert!(!loadout.provides_buff("quickness"));
    }

    #[test]
    fn test_loadout_json_round_trip() {
        let loadout = sample_loadout();
        let json = serde_json::to_string(&loadout).unwrap();
        let restored: Loadout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, loadout);
    }
}
