//! Build synthesizer: assembles a complete [`Loadout`] for an
//! archetype/role pair from catalog data.
//!
//! The synthesizer runs a five-stage scored-selection pipeline:
//!
//! 1. **Weapon sets** - enumerate usable weapons, reject incompatible
//!    pairings, keep up to two sets
//! 2. **Abilities** - score heal/utility/elite candidates against role
//!    keywords, weapon synergy, and category tags
//! 3. **Specializations** - score lines (elite variant strongly favored),
//!    keep three, force the requested elite in
//! 4. **Traits** - best trait per tier within each selected line
//! 5. **Equipment** - per-slot dot product of item attributes against the
//!    role's decaying stat-weight vector, scaled by rarity
//!
//! All heuristics are data: the role-keyed tables live in
//! [`SelectionRules`], which is serde-loadable so a deployment can retune
//! them without code changes. [`SelectionRules::default`] carries the
//! built-in tables.
//!
//! Synthesis is deterministic: every stage breaks score ties by ascending
//! catalog id, so a fixed catalog and rules always produce the same
//! loadout.

pub use self::{
    loadout::{AbilityPicks, Loadout, SpecializationPick, WeaponSet},
    rules::{RoleRules, SelectionRules},
    synthesizer::{BuildSynthesizer, SynthesisError, weapons_compatible},
};

pub mod loadout;
pub mod rules;
pub mod synthesizer;
