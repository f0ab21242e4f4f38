//! Candidate pool construction.

use serde::{Deserialize, Serialize};

use squadforge_builder::{BuildSynthesizer, Loadout, SelectionRules, SynthesisError};
use squadforge_catalog::{CatalogProvider, Role};

/// The fixed set of loadouts a search draws team members from.
///
/// Pools are resolved fully in memory before a search starts, so the hot
/// loop never touches the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePool {
    pub loadouts: Vec<Loadout>,
}

impl CandidatePool {
    #[must_use]
    pub fn from_loadouts(loadouts: Vec<Loadout>) -> Self {
        CandidatePool { loadouts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loadouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }

    /// Builds one loadout per (archetype, role) pair via the build
    /// synthesizer, using each archetype's signature elite specialization
    /// when it has one.
    ///
    /// A pair the synthesizer cannot arm (no usable weapons) is skipped;
    /// one unbuildable combination should not kill the whole pool. An
    /// unknown archetype name still fails, since that is a caller mistake
    /// rather than a data gap.
    pub fn synthesize<C: CatalogProvider>(
        catalog: &C,
        rules: &SelectionRules,
        archetypes: &[String],
        roles: &[Role],
    ) -> Result<Self, SynthesisError> {
        let synthesizer = BuildSynthesizer::new(catalog, rules);
        let mut loadouts = Vec::new();
        for name in archetypes {
            let elite = catalog
                .archetype(name)
                .ok_or_else(|| SynthesisError::UnknownArchetype { name: name.clone() })?
                .elite_specialization
                .clone();
            for &role in roles {
                match synthesizer.synthesize(name, role, elite.as_deref()) {
                    Ok(loadout) => loadouts.push(loadout),
                    Err(SynthesisError::EmptyCandidatePool { .. }) => {}
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(CandidatePool { loadouts })
    }
}

#[cfg(test)]
mod tests {
    use squadforge_catalog::{
        Archetype, InMemoryCatalog, WeaponEntry, WeaponHand, WeaponKind,
    };

    use super::*;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog {
            archetypes: vec![
                Archetype {
                    id: 1,
                    name: "warden".to_owned(),
                    weapon_kinds: [WeaponKind::Staff].into_iter().collect(),
                    elite_specialization: None,
                    role_affinities: vec![],
                },
                Archetype {
                    id: 2,
                    name: "tinkerer".to_owned(),
                    weapon_kinds: [WeaponKind::Rifle].into_iter().collect(),
                    elite_specialization: None,
                    role_affinities: vec![],
                },
            ],
            weapons: vec![WeaponEntry {
                id: 10,
                name: "Staff".to_owned(),
                kind: WeaponKind::Staff,
                hand: WeaponHand::TwoHanded,
                archetypes: vec!["warden".to_owned()],
                requires_specialization: None,
            }],
            ..InMemoryCatalog::default()
        }
    }

    #[test]
    fn test_unbuildable_pairs_are_skipped() {
        let catalog = catalog();
        let rules = SelectionRules::default();
        // tinkerer has no weapons at all, so only warden loadouts appear
        let pool = CandidatePool::synthesize(
            &catalog,
            &rules,
            &["warden".to_owned(), "tinkerer".to_owned()],
            &[Role::Healer, Role::Tank],
        )
        .unwrap();
        assert_eq!(pool.len(), 2);
        assert!(pool.loadouts.iter().all(|l| l.archetype == "warden"));
    }

    #[test]
    fn test_unknown_archetype_fails_the_pool() {
        let catalog = catalog();
        let rules = SelectionRules::default();
        let err = CandidatePool::synthesize(
            &catalog,
            &rules,
            &["bard".to_owned()],
            &[Role::Healer],
        )
        .unwrap_err();
        assert!(matches!(err, SynthesisError::UnknownArchetype { .. }));
    }
}
