//! Read-only catalog access.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    archetype::Archetype,
    entry::{
        AbilityEntry, EquipmentSlot, ItemEntry, SpecializationEntry, TraitEntry, WeaponEntry,
        WeaponKind,
    },
};

/// Read-only lookups over game data.
///
/// The seam between the optimization engine and catalog storage. All
/// lookups are resolved into in-memory candidate lists before a search
/// loop starts, so implementations are free to be slow.
pub trait CatalogProvider {
    /// Looks up an archetype by name.
    fn archetype(&self, name: &str) -> Option<&Archetype>;

    /// All archetypes in the catalog.
    fn archetypes(&self) -> &[Archetype];

    /// Weapons usable by `archetype`, optionally unlocked by an elite
    /// specialization.
    fn list_weapons(&self, archetype: &str, elite: Option<&str>) -> Vec<WeaponEntry>;

    /// Abilities usable by `archetype` with the given elite specialization
    /// and selected weapon kinds. Weapon-bound abilities are only returned
    /// when their kind is among `weapon_kinds`.
    fn list_abilities(
        &self,
        archetype: &str,
        elite: Option<&str>,
        weapon_kinds: &BTreeSet<WeaponKind>,
    ) -> Vec<AbilityEntry>;

    /// Specialization lines belonging to `archetype`.
    fn list_specializations(&self, archetype: &str) -> Vec<SpecializationEntry>;

    /// Traits belonging to the specialization with id `specialization`.
    fn list_traits(&self, specialization: u32) -> Vec<TraitEntry>;

    /// Items for `slot` at or above `level_floor`.
    fn list_equipment(&self, slot: EquipmentSlot, level_floor: u16) -> Vec<ItemEntry>;
}

/// Catalog backed by plain entry lists, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    #[serde(default)]
    pub weapons: Vec<WeaponEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,
    #[serde(default)]
    pub specializations: Vec<SpecializationEntry>,
    #[serde(default)]
    pub traits: Vec<TraitEntry>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

fn spec_requirement_met(requires: Option<&String>, elite: Option<&str>) -> bool {
    match requires {
        None => true,
        Some(required) => elite == Some(required.as_str()),
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn archetype(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    fn list_weapons(&self, archetype: &str, elite: Option<&str>) -> Vec<WeaponEntry> {
        self.weapons
            .iter()
            .filter(|w| w.archetypes.iter().any(|a| a == archetype))
            .filter(|w| spec_requirement_met(w.requires_specialization.as_ref(), elite))
            .cloned()
            .collect()
    }

    fn list_abilities(
        &self,
        archetype: &str,
        elite: Option<&str>,
        weapon_kinds: &BTreeSet<WeaponKind>,
    ) -> Vec<AbilityEntry> {
        self.abilities
            .iter()
            .filter(|a| a.archetypes.iter().any(|name| name == archetype))
            .filter(|a| spec_requirement_met(a.requires_specialization.as_ref(), elite))
            .filter(|a| a.weapon_kind.is_none_or(|kind| weapon_kinds.contains(&kind)))
            .cloned()
            .collect()
    }

    fn list_specializations(&self, archetype: &str) -> Vec<SpecializationEntry> {
        self.specializations
            .iter()
            .filter(|s| s.archetype == archetype)
            .cloned()
            .collect()
    }

    fn list_traits(&self, specialization: u32) -> Vec<TraitEntry> {
        self.traits
            .iter()
            .filter(|t| t.specialization == specialization)
            .cloned()
            .collect()
    }

    fn list_equipment(&self, slot: EquipmentSlot, level_floor: u16) -> Vec<ItemEntry> {
        self.items
            .iter()
            .filter(|i| i.slot == slot && i.level >= level_floor)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::entry::{AbilitySlot, Rarity, WeaponHand};

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog {
            archetypes: vec![Archetype {
                id: 1,
                name: "warden".to_owned(),
                weapon_kinds: [WeaponKind::Sword, WeaponKind::Longbow].into_iter().collect(),
                elite_specialization: Some("dragonhunter".to_owned()),
                role_affinities: vec![],
            }],
            weapons: vec![
                WeaponEntry {
                    id: 10,
                    name: "Sword".to_owned(),
                    kind: WeaponKind::Sword,
                    hand: WeaponHand::MainHand,
                    archetypes: vec!["warden".to_owned()],
                    requires_specialization: None,
                },
                WeaponEntry {
                    id: 11,
                    name: "Longbow".to_owned(),
                    kind: WeaponKind::Longbow,
                    hand: WeaponHand::TwoHanded,
                    archetypes: vec!["warden".to_owned()],
                    requires_specialization: Some("dragonhunter".to_owned()),
                },
                WeaponEntry {
                    id: 12,
                    name: "Rifle".to_owned(),
                    kind: WeaponKind::Rifle,
                    hand: WeaponHand::TwoHanded,
                    archetypes: vec!["tinkerer".to_owned()],
                    requires_specialization: None,
                },
            ],
            abilities: vec![
                AbilityEntry {
                    id: 20,
                    name: "Mending Light".to_owned(),
                    slot: AbilitySlot::Heal,
                    archetypes: vec!["warden".to_owned()],
                    requires_specialization: None,
                    weapon_kind: None,
                    categories: vec!["support".to_owned()],
                },
                AbilityEntry {
                    id: 21,
                    name: "Piercing Volley".to_owned(),
                    slot: AbilitySlot::Utility,
                    archetypes: vec!["warden".to_owned()],
                    requires_specialization: None,
                    weapon_kind: Some(WeaponKind::Longbow),
                    categories: vec![],
                },
            ],
            specializations: vec![
                SpecializationEntry {
                    id: 30,
                    name: "Valor".to_owned(),
                    archetype: "warden".to_owned(),
                    elite: false,
                },
                SpecializationEntry {
                    id: 31,
                    name: "Dragonhunter".to_owned(),
                    archetype: "warden".to_owned(),
                    elite: true,
                },
            ],
            traits: vec![TraitEntry {
                id: 40,
                name: "Stalwart Defense".to_owned(),
                specialization: 30,
                tier: crate::entry::TraitTier::Adept,
            }],
            items: vec![
                ItemEntry {
                    id: 50,
                    name: "Berserker Helm".to_owned(),
                    slot: EquipmentSlot::Helm,
                    level: 80,
                    rarity: Rarity::Exotic,
                    attributes: BTreeMap::new(),
                    effects: vec![],
                },
                ItemEntry {
                    id: 51,
                    name: "Leveling Helm".to_owned(),
                    slot: EquipmentSlot::Helm,
                    level: 40,
                    rarity: Rarity::Fine,
                    attributes: BTreeMap::new(),
                    effects: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_weapons_filtered_by_archetype_and_elite() {
        let catalog = sample_catalog();

        let base = catalog.list_weapons("warden", None);
        assert_eq!(base.iter().map(|w| w.id).collect::<Vec<_>>(), [10]);

        let with_elite = catalog.list_weapons("warden", Some("dragonhunter"));
        assert_eq!(with_elite.iter().map(|w| w.id).collect::<Vec<_>>(), [10, 11]);
    }

    #[test]
    fn test_weapon_bound_abilities_require_selected_kind() {
        let catalog = sample_catalog();

        let without_bow = catalog.list_abilities(
            "warden",
            None,
            &[WeaponKind::Sword].into_iter().collect(),
        );
        assert_eq!(without_bow.iter().map(|a| a.id).collect::<Vec<_>>(), [20]);

        let with_bow = catalog.list_abilities(
            "warden",
            None,
            &[WeaponKind::Longbow].into_iter().collect(),
        );
        assert_eq!(with_bow.iter().map(|a| a.id).collect::<Vec<_>>(), [20, 21]);
    }

    #[test]
    fn test_equipment_level_floor() {
        let catalog = sample_catalog();
        let gear = catalog.list_equipment(EquipmentSlot::Helm, 80);
        assert_eq!(gear.iter().map(|i| i.id).collect::<Vec<_>>(), [50]);
        let any = catalog.list_equipment(EquipmentSlot::Helm, 0);
        assert_eq!(any.len(), 2);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = sample_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: InMemoryCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_unknown_archetype_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.archetype("bard").is_none());
        assert!(catalog.list_weapons("bard", None).is_empty());
    }
}
