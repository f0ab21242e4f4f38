//! Catalog data model for the squadforge team composition engine.
//!
//! This crate defines the read-only game data the rest of the workspace
//! consumes: playable archetypes, their weapons, abilities, specializations
//! with traits, and equipment items. It deliberately contains no selection
//! or scoring logic — that lives in `squadforge-builder` and
//! `squadforge-scorer`.
//!
//! # Architecture
//!
//! ```text
//! CatalogProvider (trait, read-only lookups)
//!     ↑ implemented by
//! InMemoryCatalog (serde-loadable entry lists)
//!     ↑ queried by
//! Build Synthesizer / Team Search (other crates)
//! ```
//!
//! The [`CatalogProvider`] trait is the seam between the optimization engine
//! and whatever actually stores the game data. The engine resolves all
//! catalog lookups into in-memory candidate lists before any search loop
//! starts, so providers are free to be as slow as a disk or as fast as a
//! `Vec`.

pub use self::{
    archetype::{Archetype, ParseRoleError, Role},
    entry::{
        AbilityEntry, AbilitySlot, Attribute, EquipmentSlot, ItemEntry, Rarity,
        SpecializationEntry, TraitEntry, TraitTier, WeaponEntry, WeaponHand, WeaponKind,
    },
    provider::{CatalogProvider, InMemoryCatalog},
};

pub mod archetype;
pub mod entry;
pub mod provider;
