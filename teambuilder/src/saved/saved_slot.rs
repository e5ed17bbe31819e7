use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::{
    CreatureId,
    MoveId,
    PersonalityId,
    TalentTable,
    TypeId,
};

use crate::slot::{
    MoveSet,
    RosterSlot,
};

/// A persisted slot, in the shape the team API stores it.
///
/// Identifiers are raw numbers, where `0` means "not selected". A slot's place in the team is the
/// record's place in the list; any stored `position` field is ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSlotRecord {
    #[serde(default)]
    pub monster_id: u32,
    #[serde(default)]
    pub personality_id: u32,
    #[serde(default)]
    pub legacy_type_id: u32,
    #[serde(default)]
    pub move1_id: u32,
    #[serde(default)]
    pub move2_id: u32,
    #[serde(default)]
    pub move3_id: u32,
    #[serde(default)]
    pub move4_id: u32,
    #[serde(default)]
    pub talent: TalentTable,
}

impl RosterSlot {
    /// Converts a persisted record into a slot.
    ///
    /// The record is trusted; no invariants are checked or repaired.
    pub fn from_saved(record: &SavedSlotRecord) -> Self {
        Self {
            creature_id: CreatureId::from_raw(record.monster_id),
            personality_id: PersonalityId::from_raw(record.personality_id),
            legacy_type_id: TypeId::from_raw(record.legacy_type_id),
            moves: MoveSet::new([
                MoveId::from_raw(record.move1_id),
                MoveId::from_raw(record.move2_id),
                MoveId::from_raw(record.move3_id),
                MoveId::from_raw(record.move4_id),
            ]),
            talent: record.talent.clone(),
        }
    }

    /// Converts the slot into a persisted record.
    pub fn to_saved(&self) -> SavedSlotRecord {
        let [move1, move2, move3, move4] = *self.moves.as_array();
        SavedSlotRecord {
            monster_id: CreatureId::into_raw(self.creature_id),
            personality_id: PersonalityId::into_raw(self.personality_id),
            legacy_type_id: TypeId::into_raw(self.legacy_type_id),
            move1_id: MoveId::into_raw(move1),
            move2_id: MoveId::into_raw(move2),
            move3_id: MoveId::into_raw(move3),
            move4_id: MoveId::into_raw(move4),
            talent: self.talent.clone(),
        }
    }
}
