use teambuilder_data::{
    CreatureId,
    MoveId,
    PartialTalentTable,
    PersonalityId,
    TalentStat,
    TalentTable,
    TypeId,
};

use crate::{
    error::MutationError,
    slot::{
        MAX_BOOSTED_TALENTS,
        MOVE_SLOTS,
        RosterSlot,
    },
};

/// A partial update to a single slot.
///
/// For every field, `None` leaves the slot untouched and `Some(None)` clears it. Talent entries are
/// merged stat by stat; a boost of zero clears that stat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlotPatch {
    pub creature_id: Option<Option<CreatureId>>,
    pub personality_id: Option<Option<PersonalityId>>,
    pub legacy_type_id: Option<Option<TypeId>>,
    /// Moves by index (position 1 is index 0).
    pub moves: [Option<Option<MoveId>>; MOVE_SLOTS],
    pub talent: PartialTalentTable,
}

impl SlotPatch {
    /// Creates an empty patch, which changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the creature.
    pub fn creature(mut self, creature_id: Option<CreatureId>) -> Self {
        self.creature_id = Some(creature_id);
        self
    }

    /// Sets or clears the personality.
    pub fn personality(mut self, personality_id: Option<PersonalityId>) -> Self {
        self.personality_id = Some(personality_id);
        self
    }

    /// Sets or clears the legacy type.
    pub fn legacy_type(mut self, legacy_type_id: Option<TypeId>) -> Self {
        self.legacy_type_id = Some(legacy_type_id);
        self
    }

    /// Sets or clears the move at the given 1-based position.
    ///
    /// Panics if the position is not between 1 and 4.
    pub fn move_at(mut self, position: usize, move_id: Option<MoveId>) -> Self {
        assert!(
            (1..=MOVE_SLOTS).contains(&position),
            "move position {position} is out of range (expected 1 through {MOVE_SLOTS})"
        );
        self.moves[position - 1] = Some(move_id);
        self
    }

    /// Sets a single talent boost.
    pub fn talent_boost(mut self, stat: TalentStat, value: u8) -> Self {
        self.talent.insert(stat, value);
        self
    }

    /// Replaces every talent boost.
    pub fn talents(mut self, table: &TalentTable) -> Self {
        self.talent.extend(table.entries());
        self
    }

    /// Checks if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.creature_id.is_none()
            && self.personality_id.is_none()
            && self.legacy_type_id.is_none()
            && self.moves.iter().all(|move_id| move_id.is_none())
            && self.talent.is_empty()
    }

    /// Produces the slot that results from applying this patch.
    ///
    /// The patch is rejected if it would raise the number of boosted stats above
    /// [`MAX_BOOSTED_TALENTS`], or if a move it sets is already selected at another position. A
    /// slot that already breaks one of these rules (for example, after loading stale saved data)
    /// can still be patched, as long as the patch does not make things worse.
    pub fn apply_to(&self, slot: &RosterSlot) -> Result<RosterSlot, MutationError> {
        let mut next = slot.clone();
        if let Some(creature_id) = self.creature_id {
            next.creature_id = creature_id;
        }
        if let Some(personality_id) = self.personality_id {
            next.personality_id = personality_id;
        }
        if let Some(legacy_type_id) = self.legacy_type_id {
            next.legacy_type_id = legacy_type_id;
        }
        for (index, move_id) in self.moves.iter().enumerate() {
            if let Some(move_id) = move_id {
                next.moves.set(index + 1, *move_id);
            }
        }
        next.talent = next.talent.merged(&self.talent);

        let count = next.talent.boosted_count();
        if count > MAX_BOOSTED_TALENTS && count > slot.talent.boosted_count() {
            return Err(MutationError::TalentCapExceeded {
                count,
                max: MAX_BOOSTED_TALENTS,
            });
        }

        for (index, move_id) in self.moves.iter().enumerate() {
            let position = index + 1;
            if let Some(Some(move_id)) = move_id {
                if let Some((other, _)) = next
                    .moves
                    .entries()
                    .find(|(other, selected)| *other != position && *selected == Some(*move_id))
                {
                    return Err(MutationError::DuplicateMove {
                        move_id: *move_id,
                        position: other,
                    });
                }
            }
        }

        Ok(next)
    }
}

#[cfg(test)]
mod slot_patch_test {
    use pretty_assertions::assert_eq;
    use teambuilder_data::{
        CreatureId,
        MoveId,
        PersonalityId,
        TalentStat,
        TalentTable,
    };

    use crate::{
        error::MutationError,
        slot::{
            MoveSet,
            RosterSlot,
            SlotPatch,
            empty_slot,
        },
    };

    fn boosted_slot() -> RosterSlot {
        RosterSlot {
            creature_id: Some(CreatureId(7)),
            talent: TalentTable {
                phy_atk: 10,
                mag_atk: 10,
                phy_def: 10,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let slot = boosted_slot();
        assert!(SlotPatch::new().is_empty());
        assert_eq!(SlotPatch::new().apply_to(&slot), Ok(slot.clone()));
    }

    #[test]
    fn sets_and_clears_fields() {
        let slot = SlotPatch::new()
            .creature(Some(CreatureId(7)))
            .personality(Some(PersonalityId(2)))
            .move_at(2, Some(MoveId(20)))
            .apply_to(&empty_slot())
            .unwrap();
        assert_eq!(slot.creature_id, Some(CreatureId(7)));
        assert_eq!(slot.personality_id, Some(PersonalityId(2)));
        assert_eq!(slot.moves, MoveSet::new([None, Some(MoveId(20)), None, None]));

        let slot = SlotPatch::new()
            .personality(None)
            .move_at(2, None)
            .apply_to(&slot)
            .unwrap();
        assert_eq!(slot.creature_id, Some(CreatureId(7)));
        assert_eq!(slot.personality_id, None);
        assert!(slot.moves.is_empty());
    }

    #[test]
    fn rejects_fourth_boosted_stat() {
        assert_eq!(
            SlotPatch::new()
                .talent_boost(TalentStat::MagDef, 10)
                .apply_to(&boosted_slot()),
            Err(MutationError::TalentCapExceeded { count: 4, max: 3 })
        );
    }

    #[test]
    fn allows_swapping_boosted_stat_in_one_patch() {
        let slot = SlotPatch::new()
            .talent_boost(TalentStat::PhyAtk, 0)
            .talent_boost(TalentStat::Spd, 7)
            .apply_to(&boosted_slot())
            .unwrap();
        assert_eq!(
            slot.talent.boosted_stats().collect::<Vec<_>>(),
            vec![TalentStat::MagAtk, TalentStat::PhyDef, TalentStat::Spd]
        );
    }

    #[test]
    fn allows_reducing_stale_over_cap_talents() {
        let mut slot = boosted_slot();
        slot.talent.hp = 10;
        let slot = SlotPatch::new()
            .talent_boost(TalentStat::Hp, 0)
            .apply_to(&slot)
            .unwrap();
        assert_eq!(slot.talent.boosted_count(), 3);
    }

    #[test]
    fn rejects_duplicate_move() {
        let slot = SlotPatch::new()
            .move_at(1, Some(MoveId(5)))
            .apply_to(&boosted_slot())
            .unwrap();
        assert_eq!(
            SlotPatch::new()
                .move_at(3, Some(MoveId(5)))
                .apply_to(&slot),
            Err(MutationError::DuplicateMove {
                move_id: MoveId(5),
                position: 1,
            })
        );
    }

    #[test]
    fn allows_moving_a_move_between_positions_in_one_patch() {
        let slot = SlotPatch::new()
            .move_at(1, Some(MoveId(5)))
            .apply_to(&empty_slot())
            .unwrap();
        let slot = SlotPatch::new()
            .move_at(1, None)
            .move_at(4, Some(MoveId(5)))
            .apply_to(&slot)
            .unwrap();
        assert_eq!(slot.moves, MoveSet::new([None, None, None, Some(MoveId(5))]));
    }
}
