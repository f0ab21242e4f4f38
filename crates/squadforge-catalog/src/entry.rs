//! Catalog entry types: weapons, abilities, specializations, traits, items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weapon category. Classification drives the weapon-set compatibility
/// rules in the build synthesizer.
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
pub enum WeaponKind {
    Greatsword,
    Sword,
    Axe,
    Dagger,
    Mace,
    Hammer,
    Staff,
    Scepter,
    Focus,
    Shield,
    Torch,
    Warhorn,
    Longbow,
    Shortbow,
    Rifle,
    Pistol,
}

impl WeaponKind {
    /// Whether a weapon of this kind occupies both hands.
    #[must_use]
    pub fn is_two_handed(self) -> bool {
        matches!(
            self,
            WeaponKind::Greatsword
                | WeaponKind::Hammer
                | WeaponKind::Staff
                | WeaponKind::Longbow
                | WeaponKind::Shortbow
                | WeaponKind::Rifle
        )
    }

    /// Whether this kind attacks at range. A weapon-set pair may contain at
    /// most one ranged kind.
    #[must_use]
    pub fn is_ranged(self) -> bool {
        matches!(
            self,
            WeaponKind::Longbow
                | WeaponKind::Shortbow
                | WeaponKind::Rifle
                | WeaponKind::Pistol
                | WeaponKind::Scepter
                | WeaponKind::Staff
        )
    }
}

/// Which hand slot a catalog weapon occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponHand {
    MainHand,
    OffHand,
    TwoHanded,
}

/// A concrete weapon the catalog offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponEntry {
    pub id: u32,
    pub name: String,
    pub kind: WeaponKind,
    pub hand: WeaponHand,
    /// Archetype names that can wield this weapon.
    pub archetypes: Vec<String>,
    /// If set, the weapon is only usable with this elite specialization.
    #[serde(default)]
    pub requires_specialization: Option<String>,
}

/// Slot an ability is equipped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    Heal,
    Utility,
    Elite,
}

/// A usable ability (heal, utility, or elite skill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub id: u32,
    pub name: String,
    pub slot: AbilitySlot,
    pub archetypes: Vec<String>,
    #[serde(default)]
    pub requires_specialization: Option<String>,
    /// Some abilities are tied to a weapon kind and only score when that
    /// weapon is selected.
    #[serde(default)]
    pub weapon_kind: Option<WeaponKind>,
    /// Free-form category tags (`"control"`, `"support"`, ...).
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A specialization line (core or elite) belonging to one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationEntry {
    pub id: u32,
    pub name: String,
    pub archetype: String,
    #[serde(default)]
    pub elite: bool,
}

/// Trait tiers within a specialization line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TraitTier {
    Adept,
    Master,
    Grandmaster,
}

impl TraitTier {
    pub const ALL: [TraitTier; 3] = [TraitTier::Adept, TraitTier::Master, TraitTier::Grandmaster];
}

/// A selectable trait within one tier of a specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitEntry {
    pub id: u32,
    pub name: String,
    /// `SpecializationEntry::id` of the owning line.
    pub specialization: u32,
    pub tier: TraitTier,
}

/// Character attributes carried by equipment.
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
pub enum Attribute {
    Power,
    Precision,
    Ferocity,
    ConditionDamage,
    Expertise,
    HealingPower,
    Concentration,
    Vitality,
    Toughness,
}

/// Item rarity. Only the top tiers matter to equipment scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Basic,
    Fine,
    Masterwork,
    Rare,
    Exotic,
    Ascended,
}

/// Slot a piece of equipment is worn in.
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
pub enum EquipmentSlot {
    Helm,
    Shoulders,
    Coat,
    Gloves,
    Leggings,
    Boots,
    Amulet,
    Ring1,
    Ring2,
    Accessory1,
    Accessory2,
    Backpack,
    Rune,
    Food,
    Utility,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 15] = [
        EquipmentSlot::Helm,
        EquipmentSlot::Shoulders,
        EquipmentSlot::Coat,
        EquipmentSlot::Gloves,
        EquipmentSlot::Leggings,
        EquipmentSlot::Boots,
        EquipmentSlot::Amulet,
        EquipmentSlot::Ring1,
        EquipmentSlot::Ring2,
        EquipmentSlot::Accessory1,
        EquipmentSlot::Accessory2,
        EquipmentSlot::Backpack,
        EquipmentSlot::Rune,
        EquipmentSlot::Food,
        EquipmentSlot::Utility,
    ];

    /// Consumable slots use a lower level floor and effect-keyword scoring.
    #[must_use]
    pub fn is_consumable(self) -> bool {
        matches!(self, EquipmentSlot::Food | EquipmentSlot::Utility)
    }
}

/// A wearable or consumable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id: u32,
    pub name: String,
    pub slot: EquipmentSlot,
    pub level: u16,
    pub rarity: Rarity,
    /// Attribute bonuses, keyed for deterministic iteration.
    #[serde(default)]
    pub attributes: BTreeMap<Attribute, f32>,
    /// Free-form effect tags on consumables and runes.
    #[serde(default)]
    pub effects: Vec<String>,
}
