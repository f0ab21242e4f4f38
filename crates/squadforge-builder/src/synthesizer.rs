//! The five-stage build assembly pipeline.

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

use squadforge_catalog::{
    AbilityEntry, AbilitySlot, CatalogProvider, EquipmentSlot, ItemEntry, Role,
    SpecializationEntry, TraitEntry, TraitTier, WeaponEntry, WeaponHand, WeaponKind,
};

use crate::{
    loadout::{AbilityPicks, Loadout, SpecializationPick, WeaponSet},
    rules::{RoleRules, SelectionRules},
};

const ABILITY_KEYWORD_BONUS: f32 = 100.0;
const ABILITY_WEAPON_BONUS: f32 = 50.0;
const ABILITY_CONTROL_BONUS: f32 = 30.0;
const ABILITY_SUPPORT_BONUS: f32 = 40.0;

const SPEC_ELITE_BONUS: f32 = 1000.0;
const SPEC_KEYWORD_BONUS: f32 = 500.0;
const SPEC_CORE_BONUS: f32 = 100.0;
const SPEC_META_BONUS: f32 = 200.0;

const TRAIT_KEYWORD_BONUS: f32 = 100.0;
const TRAIT_SIGNATURE_BUFF_BONUS: f32 = 200.0;
const TRAIT_ELITE_NAME_BONUS: f32 = 150.0;
const TRAIT_ELITE_TERM_BONUS: f32 = 100.0;
const TRAIT_DAMAGE_LOSS_PENALTY: f32 = -50.0;

const CONTROL_CATEGORIES: [&str; 4] = ["control", "stun", "daze", "knockback"];
const SUPPORT_CATEGORIES: [&str; 3] = ["boon", "heal", "support"];
const DAMAGE_LOSS_TERMS: [&str; 3] = ["reduce", "decrease", "less"];

/// Synthesis failure.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SynthesisError {
    /// The requested archetype does not exist in the catalog.
    #[display("unknown archetype: {name}")]
    UnknownArchetype { name: String },
    /// Stage 1 found no usable weapon at all, so no build can exist.
    #[display("no usable weapons for archetype {archetype} in role {role}")]
    EmptyCandidatePool { archetype: String, role: Role },
}

/// Whether two one-handed weapons may be equipped together: no two-handed
/// weapon in a pair, never two shields, never two ranged weapons.
#[must_use]
pub fn weapons_compatible(a: &WeaponEntry, b: &WeaponEntry) -> bool {
    if a.kind.is_two_handed() || b.kind.is_two_handed() {
        return false;
    }
    if a.kind == WeaponKind::Shield && b.kind == WeaponKind::Shield {
        return false;
    }
    if a.kind.is_ranged() && b.kind.is_ranged() {
        return false;
    }
    true
}

/// An ordered weighted predicate. A stage score is the sum of the weights
/// of every matching rule.
struct ScoreRule<'a, T: ?Sized> {
    weight: f32,
    matches: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized> ScoreRule<'a, T> {
    fn new(weight: f32, matches: impl Fn(&T) -> bool + 'a) -> Self {
        ScoreRule {
            weight,
            matches: Box::new(matches),
        }
    }
}

fn apply_rules<T: ?Sized>(rules: &[ScoreRule<'_, T>], candidate: &T) -> f32 {
    rules
        .iter()
        .filter(|rule| (rule.matches)(candidate))
        .map(|rule| rule.weight)
        .sum()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Assembles loadouts from catalog data under a set of selection rules.
#[derive(Debug)]
pub struct BuildSynthesizer<'a, C: CatalogProvider> {
    catalog: &'a C,
    rules: &'a SelectionRules,
}

impl<'a, C: CatalogProvider> BuildSynthesizer<'a, C> {
    pub fn new(catalog: &'a C, rules: &'a SelectionRules) -> Self {
        BuildSynthesizer { catalog, rules }
    }

    /// Runs the full pipeline for one archetype/role pair.
    ///
    /// Only stage 1 can fail after the archetype resolves: a build without
    /// weapons is meaningless, while any later slot the catalog cannot
    /// fill is simply left empty.
    pub fn synthesize(
        &self,
        archetype: &str,
        role: Role,
        elite: Option<&str>,
    ) -> Result<Loadout, SynthesisError> {
        if self.catalog.archetype(archetype).is_none() {
            return Err(SynthesisError::UnknownArchetype {
                name: archetype.to_owned(),
            });
        }
        let role_rules = self.rules.role(role);

        let weapon_sets = self.select_weapon_sets(archetype, role, elite, &role_rules)?;
        let weapon_kinds: BTreeSet<WeaponKind> =
            weapon_sets.iter().flat_map(WeaponSet::kinds).collect();

        let abilities = self.select_abilities(archetype, role, elite, &weapon_kinds, &role_rules);
        let specializations = self.select_specializations(archetype, role, elite, &role_rules);
        let provided_buffs = self.derive_buffs(&role_rules, &abilities, &specializations);
        let equipment = self.select_equipment(&role_rules);

        Ok(Loadout {
            archetype: archetype.to_owned(),
            elite_specialization: elite.map(str::to_owned),
            role,
            weapon_sets,
            abilities,
            specializations,
            equipment,
            stat_priority: role_rules.stat_priority,
            provided_buffs,
        })
    }

    /// Stage 1: weapon sets.
    ///
    /// Two-handed candidates each form a set of their own; one-handed
    /// candidates are paired main-hand/off-hand under the compatibility
    /// rules. Candidates are visited in ascending id order so output is
    /// deterministic.
    fn select_weapon_sets(
        &self,
        archetype: &str,
        role: Role,
        elite: Option<&str>,
        role_rules: &RoleRules,
    ) -> Result<ArrayVec<WeaponSet, 2>, SynthesisError> {
        let mut candidates = self.catalog.list_weapons(archetype, elite);
        candidates.retain(|w| {
            role_rules.allowed_weapons.is_empty() || role_rules.allowed_weapons.contains(&w.kind)
        });
        candidates.sort_by_key(|w| w.id);

        let mut sets: ArrayVec<WeaponSet, 2> = ArrayVec::new();

        for weapon in candidates.iter().filter(|w| w.hand == WeaponHand::TwoHanded) {
            if sets.is_full() {
                break;
            }
            sets.push(WeaponSet {
                main_hand: weapon.clone(),
                off_hand: None,
            });
        }

        let main_hands: Vec<_> = candidates
            .iter()
            .filter(|w| w.hand == WeaponHand::MainHand)
            .collect();
        let off_hands: Vec<_> = candidates
            .iter()
            .filter(|w| w.hand == WeaponHand::OffHand)
            .collect();

        for main in &main_hands {
            if sets.is_full() {
                break;
            }
            if let Some(off) = off_hands.iter().find(|off| weapons_compatible(main, off)) {
                sets.push(WeaponSet {
                    main_hand: (*main).clone(),
                    off_hand: Some((*off).clone()),
                });
            }
        }

        // lone main-hands fill any remaining space
        for main in &main_hands {
            if sets.is_full() {
                break;
            }
            if !sets.iter().any(|set| set.main_hand.id == main.id) {
                sets.push(WeaponSet {
                    main_hand: (*main).clone(),
                    off_hand: None,
                });
            }
        }

        if sets.is_empty() {
            return Err(SynthesisError::EmptyCandidatePool {
                archetype: archetype.to_owned(),
                role,
            });
        }
        Ok(sets)
    }

    /// Stage 2: heal, utility (up to three), and elite abilities.
    fn select_abilities(
        &self,
        archetype: &str,
        role: Role,
        elite: Option<&str>,
        weapon_kinds: &BTreeSet<WeaponKind>,
        role_rules: &RoleRules,
    ) -> AbilityPicks {
        let mut candidates = self.catalog.list_abilities(archetype, elite, weapon_kinds);
        candidates.sort_by_key(|a| a.id);

        let rules: Vec<ScoreRule<'_, AbilityEntry>> = vec![
            ScoreRule::new(ABILITY_KEYWORD_BONUS, |a: &AbilityEntry| {
                contains_any(&a.name.to_lowercase(), &role_rules.ability_keywords)
            }),
            ScoreRule::new(ABILITY_WEAPON_BONUS, |a: &AbilityEntry| {
                a.weapon_kind.is_some_and(|kind| weapon_kinds.contains(&kind))
            }),
            ScoreRule::new(ABILITY_CONTROL_BONUS, move |a: &AbilityEntry| {
                role.wants_control_abilities()
                    && a.categories
                        .iter()
                        .any(|c| CONTROL_CATEGORIES.contains(&c.to_lowercase().as_str()))
            }),
            ScoreRule::new(ABILITY_SUPPORT_BONUS, move |a: &AbilityEntry| {
                role.wants_support_abilities()
                    && a.categories
                        .iter()
                        .any(|c| SUPPORT_CATEGORIES.contains(&c.to_lowercase().as_str()))
            }),
        ];
        let score = |a: &AbilityEntry| apply_rules(&rules, a);

        let heal =
            best_by_score(candidates.iter().filter(|a| a.slot == AbilitySlot::Heal), score)
                .cloned();
        let elite_pick =
            best_by_score(candidates.iter().filter(|a| a.slot == AbilitySlot::Elite), score)
                .cloned();

        let mut utilities: Vec<&AbilityEntry> = candidates
            .iter()
            .filter(|a| a.slot == AbilitySlot::Utility)
            .collect();
        // stable sort keeps the ascending-id order among equal scores
        utilities.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap());

        AbilityPicks {
            heal,
            utilities: utilities.into_iter().take(3).cloned().collect(),
            elite: elite_pick,
        }
    }

    /// Stage 3: three specialization lines, the requested elite forced in,
    /// each with its per-tier trait picks (stage 4).
    fn select_specializations(
        &self,
        archetype: &str,
        role: Role,
        elite: Option<&str>,
        role_rules: &RoleRules,
    ) -> Vec<SpecializationPick> {
        let mut candidates = self.catalog.list_specializations(archetype);
        candidates.sort_by_key(|s| s.id);
        if candidates.is_empty() {
            return vec![];
        }

        let is_requested_elite = |spec: &SpecializationEntry| {
            elite.is_some_and(|name| spec.elite && spec.name.eq_ignore_ascii_case(name))
        };
        let rules: Vec<ScoreRule<'_, SpecializationEntry>> = vec![
            ScoreRule::new(SPEC_ELITE_BONUS, is_requested_elite),
            ScoreRule::new(SPEC_KEYWORD_BONUS, |s: &SpecializationEntry| {
                role_rules.spec_keywords.is_empty()
                    || contains_any(&s.name.to_lowercase(), &role_rules.spec_keywords)
            }),
            ScoreRule::new(SPEC_CORE_BONUS, |s: &SpecializationEntry| !s.elite),
            ScoreRule::new(SPEC_META_BONUS, |s: &SpecializationEntry| {
                contains_any(&s.name.to_lowercase(), &role_rules.meta_specializations)
            }),
        ];
        let score = |s: &SpecializationEntry| apply_rules(&rules, s);

        let mut scored: Vec<&SpecializationEntry> = candidates.iter().collect();
        scored.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap());
        let mut selected: Vec<SpecializationEntry> =
            scored.into_iter().take(3).cloned().collect();

        // the requested elite always makes the cut
        if let Some(wanted) = candidates.iter().find(|s| is_requested_elite(s))
            && !selected.iter().any(|s| s.id == wanted.id)
        {
            if let Some(last) = selected.last_mut() {
                *last = wanted.clone();
            } else {
                selected.push(wanted.clone());
            }
        }

        selected
            .into_iter()
            .map(|spec| {
                let traits = self.select_traits(&spec, role, elite, role_rules);
                SpecializationPick {
                    specialization: spec,
                    traits,
                }
            })
            .collect()
    }

    /// Stage 4: the best trait in each tier of one specialization line.
    fn select_traits(
        &self,
        spec: &SpecializationEntry,
        role: Role,
        elite: Option<&str>,
        role_rules: &RoleRules,
    ) -> ArrayVec<TraitEntry, 3> {
        let mut candidates = self.catalog.list_traits(spec.id);
        candidates.sort_by_key(|t| t.id);

        let rules: Vec<ScoreRule<'_, TraitEntry>> = vec![
            ScoreRule::new(TRAIT_KEYWORD_BONUS, |t: &TraitEntry| {
                contains_any(&t.name.to_lowercase(), &role_rules.trait_keywords)
            }),
            ScoreRule::new(TRAIT_SIGNATURE_BUFF_BONUS, |t: &TraitEntry| {
                role_rules
                    .signature_buff
                    .as_ref()
                    .is_some_and(|buff| t.name.to_lowercase().contains(buff.as_str()))
            }),
            ScoreRule::new(TRAIT_ELITE_NAME_BONUS, |t: &TraitEntry| {
                elite.is_some_and(|name| t.name.to_lowercase().contains(&name.to_lowercase()))
            }),
            ScoreRule::new(TRAIT_ELITE_TERM_BONUS, |t: &TraitEntry| {
                elite.is_some() && t.name.to_lowercase().contains("elite")
            }),
            ScoreRule::new(TRAIT_DAMAGE_LOSS_PENALTY, move |t: &TraitEntry| {
                role.is_damage()
                    && DAMAGE_LOSS_TERMS
                        .iter()
                        .any(|term| t.name.to_lowercase().contains(term))
            }),
        ];
        let score = |t: &TraitEntry| apply_rules(&rules, t);

        let mut picks = ArrayVec::new();
        for tier in TraitTier::ALL {
            if let Some(best) = best_by_score(candidates.iter().filter(|t| t.tier == tier), score)
            {
                picks.push(best.clone());
            }
        }
        picks
    }

    /// Stage 5: best item per equipment slot.
    ///
    /// Armor and trinkets score as the dot product of item attributes with
    /// the role's decaying stat-weight vector; runes and consumables add a
    /// point per desired-effect hit. Both are scaled by the rarity
    /// multiplier. Slots with no candidate stay empty.
    fn select_equipment(&self, role_rules: &RoleRules) -> BTreeMap<EquipmentSlot, ItemEntry> {
        let weights: BTreeMap<_, _> = role_rules
            .stat_priority
            .iter()
            .enumerate()
            .map(|(rank, attr)| (*attr, self.rules.stat_weight(*attr, rank)))
            .collect();

        let score = |item: &ItemEntry| -> f32 {
            let stat_score: f32 = item
                .attributes
                .iter()
                .map(|(attr, value)| value * weights.get(attr).copied().unwrap_or(0.0))
                .sum();
            #[expect(clippy::cast_precision_loss)]
            let effect_score = item
                .effects
                .iter()
                .filter(|effect| contains_any(&effect.to_lowercase(), &role_rules.desired_effects))
                .count() as f32;
            (stat_score + effect_score) * self.rules.rarity_multiplier(item.rarity)
        };

        let mut equipment = BTreeMap::new();
        for slot in EquipmentSlot::ALL {
            let floor = if slot == EquipmentSlot::Food {
                self.rules.food_level_floor
            } else {
                self.rules.gear_level_floor
            };
            let mut items = self.catalog.list_equipment(slot, floor);
            items.sort_by_key(|i| i.id);
            if let Some(best) = best_by_score(items.iter(), score) {
                equipment.insert(slot, best.clone());
            }
        }
        equipment
    }

    /// Buffs the build contributes: the role's table plus any recognized
    /// buff keyword appearing in a selected ability or trait name.
    fn derive_buffs(
        &self,
        role_rules: &RoleRules,
        abilities: &AbilityPicks,
        specializations: &[SpecializationPick],
    ) -> BTreeSet<String> {
        let mut buffs: BTreeSet<String> = role_rules.provided_buffs.iter().cloned().collect();

        let ability_names = abilities
            .heal
            .iter()
            .chain(abilities.utilities.iter())
            .chain(abilities.elite.iter())
            .map(|a| a.name.to_lowercase());
        let trait_names = specializations
            .iter()
            .flat_map(|pick| pick.traits.iter())
            .map(|t| t.name.to_lowercase());

        for name in ability_names.chain(trait_names) {
            for keyword in &self.rules.buff_keywords {
                if name.contains(keyword.as_str()) {
                    buffs.insert(keyword.clone());
                }
            }
        }
        buffs
    }
}

/// Highest score wins; ties break toward the candidate visited first,
/// which callers keep in ascending id order.
fn best_by_score<'b, T, I, F>(candidates: I, score: F) -> Option<&'b T>
where
    I: Iterator<Item = &'b T>,
    F: Fn(&T) -> f32,
{
    candidates
        .map(|c| (score(c), c))
        .reduce(|best, next| if next.0 > best.0 { next } else { best })
        .map(|(_, c)| c)
}

#[cfg(test)]
mod tests {
    use squadforge_catalog::{
        Archetype, Attribute, InMemoryCatalog, Rarity, WeaponHand,
    };

    use super::*;

    fn weapon(id: u32, kind: WeaponKind, hand: WeaponHand) -> WeaponEntry {
        WeaponEntry {
            id,
            name: format!("weapon-{id}"),
            kind,
            hand,
            archetypes: vec!["warden".to_owned()],
            requires_specialization: None,
        }
    }

    fn ability(id: u32, name: &str, slot: AbilitySlot) -> AbilityEntry {
        AbilityEntry {
            id,
            name: name.to_owned(),
            slot,
            archetypes: vec!["warden".to_owned()],
            requires_specialization: None,
            weapon_kind: None,
            categories: vec![],
        }
    }

    fn spec(id: u32, name: &str, elite: bool) -> SpecializationEntry {
        SpecializationEntry {
            id,
            name: name.to_owned(),
            archetype: "warden".to_owned(),
            elite,
        }
    }

    fn trait_entry(id: u32, name: &str, specialization: u32, tier: TraitTier) -> TraitEntry {
        TraitEntry {
            id,
            name: name.to_owned(),
            specialization,
            tier,
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog {
            archetypes: vec![Archetype {
                id: 1,
                name: "warden".to_owned(),
                weapon_kinds: [
                    WeaponKind::Greatsword,
                    WeaponKind::Sword,
                    WeaponKind::Staff,
                    WeaponKind::Focus,
                ]
                .into_iter()
                .collect(),
                elite_specialization: Some("dragonhunter".to_owned()),
                role_affinities: vec![Role::PowerDps, Role::Healer],
            }],
            weapons: vec![
                weapon(1, WeaponKind::Greatsword, WeaponHand::TwoHanded),
                weapon(2, WeaponKind::Sword, WeaponHand::MainHand),
                weapon(3, WeaponKind::Focus, WeaponHand::OffHand),
                weapon(4, WeaponKind::Staff, WeaponHand::TwoHanded),
            ],
            abilities: vec![
                ability(10, "Healing Spring", AbilitySlot::Heal),
                ability(11, "Signet of Might", AbilitySlot::Utility),
                ability(12, "Plain Signet", AbilitySlot::Utility),
                ability(13, "Banner of Fury", AbilitySlot::Utility),
                ability(14, "Stone Shape", AbilitySlot::Utility),
                ability(15, "Elite Roar", AbilitySlot::Elite),
            ],
            specializations: vec![
                spec(20, "Strength", false),
                spec(21, "Valor", false),
                spec(22, "Arms", false),
                spec(23, "Dragonhunter", true),
            ],
            traits: vec![
                trait_entry(30, "Brutal Power", 20, TraitTier::Adept),
                trait_entry(31, "Reduced Guard", 20, TraitTier::Adept),
                trait_entry(32, "Critical Focus", 20, TraitTier::Master),
                trait_entry(33, "Grand Strike", 20, TraitTier::Grandmaster),
            ],
            items: vec![
                ItemEntry {
                    id: 40,
                    name: "Berserker Helm".to_owned(),
                    slot: EquipmentSlot::Helm,
                    level: 80,
                    rarity: Rarity::Exotic,
                    attributes: [(Attribute::Power, 60.0), (Attribute::Precision, 40.0)]
                        .into_iter()
                        .collect(),
                    effects: vec![],
                },
                ItemEntry {
                    id: 41,
                    name: "Cleric Helm".to_owned(),
                    slot: EquipmentSlot::Helm,
                    level: 80,
                    rarity: Rarity::Ascended,
                    attributes: [(Attribute::HealingPower, 63.0), (Attribute::Toughness, 40.0)]
                        .into_iter()
                        .collect(),
                    effects: vec![],
                },
            ],
        }
    }

    fn synthesize(role: Role, elite: Option<&str>) -> Loadout {
        let catalog = catalog();
        let rules = SelectionRules::default();
        BuildSynthesizer::new(&catalog, &rules)
            .synthesize("warden", role, elite)
            .unwrap()
    }

    #[test]
    fn test_unknown_archetype_is_its_own_error() {
        let catalog = catalog();
        let rules = SelectionRules::default();
        let err = BuildSynthesizer::new(&catalog, &rules)
            .synthesize("bard", Role::PowerDps, None)
            .unwrap_err();
        assert!(matches!(err, SynthesisError::UnknownArchetype { .. }));
    }

    #[test]
    fn test_empty_weapon_pool_fails() {
        let mut catalog = catalog();
        catalog.weapons.clear();
        let rules = SelectionRules::default();
        let err = BuildSynthesizer::new(&catalog, &rules)
            .synthesize("warden", Role::PowerDps, None)
            .unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyCandidatePool { .. }));
    }

    #[test]
    fn test_weapon_sets_never_violate_compatibility() {
        for role in Role::ALL {
            let catalog = catalog();
            let rules = SelectionRules::default();
            let Ok(loadout) =
                BuildSynthesizer::new(&catalog, &rules).synthesize("warden", role, None)
            else {
                continue;
            };
            for set in &loadout.weapon_sets {
                if let Some(off) = &set.off_hand {
                    assert!(weapons_compatible(&set.main_hand, off));
                }
            }
        }
    }

    #[test]
    fn test_compatibility_rules() {
        let gs = weapon(1, WeaponKind::Greatsword, WeaponHand::TwoHanded);
        let sword = weapon(2, WeaponKind::Sword, WeaponHand::MainHand);
        let shield_a = weapon(3, WeaponKind::Shield, WeaponHand::OffHand);
        let shield_b = weapon(4, WeaponKind::Shield, WeaponHand::OffHand);
        let pistol = weapon(5, WeaponKind::Pistol, WeaponHand::MainHand);
        let scepter = weapon(6, WeaponKind::Scepter, WeaponHand::MainHand);

        assert!(!weapons_compatible(&gs, &sword));
        assert!(!weapons_compatible(&shield_a, &shield_b));
        assert!(!weapons_compatible(&pistol, &scepter));
        assert!(weapons_compatible(&sword, &shield_a));
    }

    #[test]
    fn test_requested_elite_is_forced_into_specializations() {
        let loadout = synthesize(Role::PowerDps, Some("dragonhunter"));
        assert!(
            loadout
                .specializations
                .iter()
                .any(|p| p.specialization.name == "Dragonhunter")
        );
        assert!(loadout.specializations.len() <= 3);
    }

    #[test]
    fn test_keyword_scored_utilities_rank_first() {
        let loadout = synthesize(Role::PowerDps, None);
        // "Signet of Might" and "Banner of Fury" hit power-dps keywords
        let names: Vec<_> = loadout
            .abilities
            .utilities
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"Signet of Might"));
        assert!(names.contains(&"Banner of Fury"));
    }

    #[test]
    fn test_damage_roles_avoid_damage_loss_traits() {
        let loadout = synthesize(Role::PowerDps, None);
        let adept = loadout.specializations.iter().find_map(|pick| {
            pick.traits
                .iter()
                .find(|t| t.tier == TraitTier::Adept && t.specialization == 20)
        });
        assert_eq!(adept.map(|t| t.name.as_str()), Some("Brutal Power"));
    }

    #[test]
    fn test_stat_priority_drives_equipment() {
        let dps = synthesize(Role::PowerDps, None);
        assert_eq!(
            dps.equipment.get(&EquipmentSlot::Helm).map(|i| i.id),
            Some(40)
        );

        let healer = synthesize(Role::Healer, None);
        assert_eq!(
            healer.equipment.get(&EquipmentSlot::Helm).map(|i| i.id),
            Some(41)
        );
    }

    #[test]
    fn test_role_buff_table_feeds_provided_buffs() {
        let loadout = synthesize(Role::QuicknessSupport, None);
        assert!(loadout.provides_buff("quickness"));
        assert!(loadout.provides_buff("might"));
    }

    #[test]
    fn test_buff_keywords_in_ability_names_are_derived() {
        let loadout = synthesize(Role::PowerDps, None);
        // "Signet of Might" and "Banner of Fury" carry buff keywords
        assert!(loadout.provides_buff("might"));
        assert!(loadout.provides_buff("fury"));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let a = synthesize(Role::PowerDps, Some("dragonhunter"));
        let b = synthesize(Role::PowerDps, Some("dragonhunter"));
        assert_eq!(a, b);
    }
}
