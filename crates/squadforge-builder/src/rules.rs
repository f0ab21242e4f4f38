//! Data-driven selection heuristics.
//!
//! Every role-keyed table the pipeline consults lives here, so a
//! deployment can replace the heuristics by loading a different JSON
//! document instead of patching code.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use squadforge_catalog::{Attribute, Role, WeaponKind};

/// Per-role heuristic tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleRules {
    /// Weapon kinds this role considers. Empty means any kind is fine.
    #[serde(default)]
    pub allowed_weapons: BTreeSet<WeaponKind>,
    /// Name substrings that mark an ability as essential for the role.
    #[serde(default)]
    pub ability_keywords: Vec<String>,
    /// Name substrings that mark a specialization as a fit for the role.
    /// Empty means every specialization fits.
    #[serde(default)]
    pub spec_keywords: Vec<String>,
    /// Specializations considered strong for this role.
    #[serde(default)]
    pub meta_specializations: Vec<String>,
    /// Name substrings that mark a trait as valuable for the role.
    #[serde(default)]
    pub trait_keywords: Vec<String>,
    /// Buff whose appearance in a trait name earns the large
    /// buff-specific bonus (quickness/alacrity supports).
    #[serde(default)]
    pub signature_buff: Option<String>,
    /// Attributes this role values, most important first.
    #[serde(default)]
    pub stat_priority: Vec<Attribute>,
    /// Buffs a build in this role contributes regardless of picks.
    #[serde(default)]
    pub provided_buffs: Vec<String>,
    /// Effect substrings sought on runes and consumables.
    #[serde(default)]
    pub desired_effects: Vec<String>,
}

/// All tables and tuning knobs for the synthesis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRules {
    pub roles: BTreeMap<Role, RoleRules>,
    /// Buff identifiers recognized in ability/trait names when deriving
    /// `Loadout::provided_buffs`.
    pub buff_keywords: Vec<String>,
    /// Stat weight decay per priority rank (`1.0 - rank * step`).
    pub stat_weight_step: f32,
    /// Explicit weight overrides applied after the decay.
    #[serde(default)]
    pub stat_weight_overrides: BTreeMap<Attribute, f32>,
    pub ascended_multiplier: f32,
    pub exotic_multiplier: f32,
    pub lower_rarity_multiplier: f32,
    pub gear_level_floor: u16,
    pub food_level_floor: u16,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl SelectionRules {
    /// Tables for the role, falling back to empty rules for roles the
    /// document does not mention.
    #[must_use]
    pub fn role(&self, role: Role) -> RoleRules {
        self.roles.get(&role).cloned().unwrap_or_default()
    }

    /// Stat weight for the attribute at priority `rank` (0-based).
    #[must_use]
    pub fn stat_weight(&self, attribute: Attribute, rank: usize) -> f32 {
        #[expect(clippy::cast_precision_loss)]
        let decayed = (1.0 - rank as f32 * self.stat_weight_step).max(0.0);
        self.stat_weight_overrides
            .get(&attribute)
            .copied()
            .unwrap_or(decayed)
    }

    /// Rarity score multiplier (ascended / exotic / everything below).
    #[must_use]
    pub fn rarity_multiplier(&self, rarity: squadforge_catalog::Rarity) -> f32 {
        use squadforge_catalog::Rarity;
        match rarity {
            Rarity::Ascended => self.ascended_multiplier,
            Rarity::Exotic => self.exotic_multiplier,
            _ => self.lower_rarity_multiplier,
        }
    }
}

impl Default for SelectionRules {
    fn default() -> Self {
        use WeaponKind::*;

        let support_weapons: BTreeSet<WeaponKind> =
            [Staff, Warhorn, Focus, Shield, Sword, Mace].into_iter().collect();
        let support_effects = ["healing", "concentration", "vitality", "boon duration"];

        let mut roles = BTreeMap::new();
        roles.insert(
            Role::PowerDps,
            RoleRules {
                allowed_weapons: [Greatsword, Sword, Axe, Dagger, Staff, Scepter, Hammer, Longbow]
                    .into_iter()
                    .collect(),
                ability_keywords: strings(&["might", "fury", "quickness", "vulnerability"]),
                spec_keywords: strings(&["strength", "arms", "duel", "deadly"]),
                meta_specializations: strings(&[
                    "berserker",
                    "dragonhunter",
                    "soulbeast",
                    "holosmith",
                ]),
                trait_keywords: strings(&["power", "ferocity", "precision", "critical", "strike"]),
                signature_buff: None,
                stat_priority: vec![
                    Attribute::Power,
                    Attribute::Precision,
                    Attribute::Ferocity,
                    Attribute::Vitality,
                ],
                provided_buffs: vec![],
                desired_effects: strings(&["power", "precision", "ferocity", "might duration"]),
            },
        );
        roles.insert(
            Role::ConditionDps,
            RoleRules {
                allowed_weapons: [Scepter, Torch, Pistol, Shortbow, Dagger].into_iter().collect(),
                ability_keywords: strings(&["burn", "bleed", "poison", "torment", "confusion"]),
                spec_keywords: strings(&["curses", "fire", "corruption", "skirmishing"]),
                meta_specializations: strings(&["scourge", "firebrand", "renegade", "mirage"]),
                trait_keywords: strings(&[
                    "condition",
                    "burn",
                    "bleed",
                    "poison",
                    "torment",
                    "confusion",
                ]),
                signature_buff: None,
                stat_priority: vec![
                    Attribute::ConditionDamage,
                    Attribute::Expertise,
                    Attribute::Precision,
                    Attribute::Vitality,
                ],
                provided_buffs: vec![],
                desired_effects: strings(&["condition damage", "condition duration", "expertise"]),
            },
        );
        roles.insert(
            Role::Healer,
            RoleRules {
                allowed_weapons: [Staff, Warhorn, Focus, Shield].into_iter().collect(),
                ability_keywords: strings(&["heal", "regenerate", "renew", "mend", "revive"]),
                spec_keywords: strings(&["water", "salvation", "druid", "tempest"]),
                meta_specializations: strings(&["firebrand", "mechanist", "druid", "tempest"]),
                trait_keywords: strings(&["heal", "regeneration", "recovery", "mending"]),
                signature_buff: None,
                stat_priority: vec![
                    Attribute::HealingPower,
                    Attribute::Concentration,
                    Attribute::Vitality,
                    Attribute::Toughness,
                ],
                provided_buffs: strings(&["regeneration", "protection"]),
                desired_effects: strings(&support_effects),
            },
        );
        roles.insert(
            Role::QuicknessSupport,
            RoleRules {
                allowed_weapons: support_weapons.clone(),
                ability_keywords: strings(&[
                    "quickness",
                    "protection",
                    "stability",
                    "aegis",
                    "resistance",
                ]),
                spec_keywords: strings(&["tactics", "inspiration", "herald", "firebrand"]),
                meta_specializations: strings(&[
                    "firebrand",
                    "herald",
                    "scrapper",
                    "chronomancer",
                ]),
                trait_keywords: strings(&["boon", "duration", "concentration"]),
                signature_buff: Some("quickness".to_owned()),
                stat_priority: vec![
                    Attribute::HealingPower,
                    Attribute::Concentration,
                    Attribute::Vitality,
                    Attribute::Toughness,
                ],
                provided_buffs: strings(&["quickness", "might"]),
                desired_effects: strings(&support_effects),
            },
        );
        roles.insert(
            Role::AlacritySupport,
            RoleRules {
                allowed_weapons: support_weapons,
                ability_keywords: strings(&[
                    "alacrity",
                    "protection",
                    "stability",
                    "aegis",
                    "resistance",
                ]),
                spec_keywords: strings(&["tactics", "inspiration", "herald", "firebrand"]),
                meta_specializations: strings(&["mechanist", "specter", "renegade", "mirage"]),
                trait_keywords: strings(&["boon", "duration", "concentration"]),
                signature_buff: Some("alacrity".to_owned()),
                stat_priority: vec![
                    Attribute::HealingPower,
                    Attribute::Concentration,
                    Attribute::Vitality,
                    Attribute::Toughness,
                ],
                provided_buffs: strings(&["alacrity", "fury"]),
                desired_effects: strings(&support_effects),
            },
        );
        roles.insert(
            Role::Tank,
            RoleRules {
                allowed_weapons: [Shield, Focus, Warhorn, Staff, Mace].into_iter().collect(),
                ability_keywords: strings(&[
                    "block",
                    "aegis",
                    "protection",
                    "barrier",
                    "invulnerability",
                ]),
                spec_keywords: strings(&["defense", "valor", "retribution"]),
                meta_specializations: strings(&["firebrand", "chronomancer", "scourge", "herald"]),
                trait_keywords: strings(&[
                    "toughness",
                    "vitality",
                    "protection",
                    "barrier",
                    "block",
                ]),
                signature_buff: None,
                stat_priority: vec![
                    Attribute::Toughness,
                    Attribute::Vitality,
                    Attribute::HealingPower,
                    Attribute::Concentration,
                ],
                provided_buffs: strings(&["stability", "protection"]),
                desired_effects: strings(&["toughness", "vitality", "healing", "barrier"]),
            },
        );
        roles.insert(
            Role::Hybrid,
            RoleRules {
                allowed_weapons: BTreeSet::new(),
                ability_keywords: vec![],
                spec_keywords: vec![],
                meta_specializations: vec![],
                trait_keywords: vec![],
                signature_buff: None,
                stat_priority: vec![
                    Attribute::Power,
                    Attribute::Precision,
                    Attribute::Ferocity,
                    Attribute::Vitality,
                    Attribute::Toughness,
                ],
                provided_buffs: strings(&["might"]),
                desired_effects: strings(&["power", "precision"]),
            },
        );

        SelectionRules {
            roles,
            buff_keywords: strings(&[
                "quickness",
                "alacrity",
                "might",
                "fury",
                "protection",
                "regeneration",
                "stability",
                "swiftness",
                "vigor",
                "resolution",
                "aegis",
            ]),
            stat_weight_step: 0.2,
            stat_weight_overrides: BTreeMap::new(),
            ascended_multiplier: 1.2,
            exotic_multiplier: 1.0,
            lower_rarity_multiplier: 0.8,
            gear_level_floor: 80,
            food_level_floor: 60,
        }
    }
}
