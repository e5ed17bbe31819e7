use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::{
    CreatureId,
    PersonalityId,
    TalentTable,
    TypeId,
};

use crate::slot::MoveSet;

/// The most stats that may be boosted on a single slot.
pub const MAX_BOOSTED_TALENTS: usize = 3;

/// One of the six positions of a roster, holding a single creature's full build.
///
/// Every unselected field is `None`. A slot without a creature is empty, regardless of the other
/// fields.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterSlot {
    /// The chosen base creature.
    pub creature_id: Option<CreatureId>,
    /// The chosen personality.
    pub personality_id: Option<PersonalityId>,
    /// The chosen legacy type, which may grant a bonus move.
    pub legacy_type_id: Option<TypeId>,
    /// The four equipped moves.
    pub moves: MoveSet,
    /// Talent boosts.
    ///
    /// At most [`MAX_BOOSTED_TALENTS`] entries may be nonzero.
    pub talent: TalentTable,
}

impl RosterSlot {
    /// Checks if no creature is chosen.
    pub fn is_empty(&self) -> bool {
        self.creature_id.is_none()
    }
}

/// Creates a slot with every field unset and every talent boost zero.
pub fn empty_slot() -> RosterSlot {
    RosterSlot::default()
}

#[cfg(test)]
mod roster_slot_test {
    use teambuilder_data::{
        CreatureId,
        TalentTable,
    };

    use crate::slot::{
        MoveSet,
        RosterSlot,
        empty_slot,
    };

    #[test]
    fn empty_slot_has_nothing_selected() {
        let slot = empty_slot();
        assert!(slot.is_empty());
        assert_eq!(slot.personality_id, None);
        assert_eq!(slot.legacy_type_id, None);
        assert_eq!(slot.moves, MoveSet::default());
        assert_eq!(slot.talent, TalentTable::default());
        assert_eq!(slot.moves.as_array().len(), 4);
    }

    #[test]
    fn slot_with_creature_is_not_empty() {
        let slot = RosterSlot {
            creature_id: Some(CreatureId(7)),
            ..Default::default()
        };
        assert!(!slot.is_empty());
    }
}
