use anyhow::Result;
use log::warn;
use teambuilder_data::{
    CreatureData,
    CreatureId,
    DataStore,
    LegacyMoveSet,
    TypeId,
};

use crate::{
    config::RosterRules,
    error::WrapOptionError,
    legacy::LegacyResolver,
};

/// Legacy move data shared by every slot: the set of all legacy moves and the pinned leader type.
///
/// Load once per session and hand out a [`LegacyResolver`] per creature.
#[derive(Debug, Default, Clone)]
pub struct LegacyIndex {
    all_legacy_moves: LegacyMoveSet,
    leader_type: Option<TypeId>,
}

impl LegacyIndex {
    /// Creates a new index.
    pub fn new(all_legacy_moves: LegacyMoveSet, leader_type: Option<TypeId>) -> Self {
        Self {
            all_legacy_moves,
            leader_type,
        }
    }

    /// Loads the index from a data store.
    ///
    /// The leader type is looked up by the name configured in the rules. A data set without that
    /// type is allowed, but leader forms will not be pinned.
    pub fn from_store(store: &dyn DataStore, rules: &RosterRules) -> Result<Self> {
        let all_legacy_moves = store.all_legacy_moves()?;
        let leader_type = store
            .get_type_by_name(&rules.leader_type_name)?
            .map(|typ| typ.id);
        if leader_type.is_none() {
            warn!(
                "Leader type \"{}\" does not exist, so leader forms will not be pinned",
                rules.leader_type_name
            );
        }
        Ok(Self::new(all_legacy_moves, leader_type))
    }

    /// Every legacy move, across all creatures.
    pub fn all_legacy_moves(&self) -> &LegacyMoveSet {
        &self.all_legacy_moves
    }

    /// The type leader forms are pinned to.
    pub fn leader_type(&self) -> Option<TypeId> {
        self.leader_type
    }

    /// Creates a resolver for the given creature.
    pub fn resolver_for<'i>(&'i self, creature: &CreatureData) -> LegacyResolver<'i> {
        LegacyResolver::for_creature(creature, &self.all_legacy_moves, self.leader_type)
    }

    /// Looks up a creature and creates a resolver for it.
    pub fn resolver_for_id<'i>(
        &'i self,
        store: &dyn DataStore,
        creature_id: CreatureId,
    ) -> Result<LegacyResolver<'i>> {
        let creature = store
            .get_creature(creature_id)?
            .wrap_not_found_error_with_format(format_args!("creature {creature_id}"))?;
        Ok(self.resolver_for(&creature))
    }
}
