//! The team value type.

use serde::{Deserialize, Serialize};

use squadforge_builder::Loadout;

/// An ordered group of loadouts evaluated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamComposition {
    pub members: Vec<Loadout>,
}

impl TeamComposition {
    #[must_use]
    pub fn new(members: Vec<Loadout>) -> Self {
        TeamComposition { members }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
