use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    roster::Roster,
    slot::{
        MAX_BOOSTED_TALENTS,
        RosterSlot,
    },
};

/// A requirement a slot does not yet meet.
///
/// Violations describe incompleteness. They never block a mutation, only submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum SlotViolation {
    #[string = "MISSING_CREATURE"]
    MissingCreature,
    #[string = "MISSING_PERSONALITY"]
    MissingPersonality,
    #[string = "MISSING_LEGACY_TYPE"]
    MissingLegacyType,
    #[string = "INCOMPLETE_MOVES"]
    IncompleteMoves,
    #[string = "NO_TALENT_BOOST"]
    NoTalentBoost,
    #[string = "TOO_MANY_TALENT_BOOSTS"]
    TooManyTalentBoosts,
}

/// The completion state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// No creature is chosen.
    Empty,
    /// A creature is chosen, but some other requirement is not met.
    Incomplete,
    /// Every requirement is met.
    Complete,
}

/// Returns every requirement the slot does not meet, in a fixed order.
pub fn validate_slot(slot: &RosterSlot) -> Vec<SlotViolation> {
    let mut violations = Vec::new();
    if slot.creature_id.is_none() {
        violations.push(SlotViolation::MissingCreature);
    }
    if slot.personality_id.is_none() {
        violations.push(SlotViolation::MissingPersonality);
    }
    if slot.legacy_type_id.is_none() {
        violations.push(SlotViolation::MissingLegacyType);
    }
    if !slot.moves.is_complete() {
        violations.push(SlotViolation::IncompleteMoves);
    }
    let boosted = slot.talent.boosted_count();
    if boosted == 0 {
        violations.push(SlotViolation::NoTalentBoost);
    }
    if boosted > MAX_BOOSTED_TALENTS {
        violations.push(SlotViolation::TooManyTalentBoosts);
    }
    violations
}

/// The completion state of the slot.
pub fn slot_state(slot: &RosterSlot) -> SlotState {
    if slot.is_empty() {
        SlotState::Empty
    } else if validate_slot(slot).is_empty() {
        SlotState::Complete
    } else {
        SlotState::Incomplete
    }
}

/// Checks if the slot meets every requirement.
pub fn is_slot_complete(slot: &RosterSlot) -> bool {
    slot_state(slot) == SlotState::Complete
}

/// Checks if every slot is complete and a team item is chosen.
pub fn is_roster_submittable(roster: &Roster) -> bool {
    roster.chosen_item.is_some() && roster.slots().iter().all(is_slot_complete)
}

#[cfg(test)]
mod slot_validator_test {
    use pretty_assertions::assert_eq;
    use teambuilder_data::{
        CreatureId,
        ItemId,
        MoveId,
        PersonalityId,
        TalentTable,
        TypeId,
    };

    use crate::{
        roster::Roster,
        slot::{
            MoveSet,
            RosterSlot,
            empty_slot,
        },
        validator::{
            SlotState,
            SlotViolation,
            is_roster_submittable,
            slot_state,
            validate_slot,
        },
    };

    fn complete_slot(creature: u32) -> RosterSlot {
        RosterSlot {
            creature_id: Some(CreatureId(creature)),
            personality_id: Some(PersonalityId(1)),
            legacy_type_id: Some(TypeId(2)),
            moves: MoveSet::new([
                Some(MoveId(1)),
                Some(MoveId(2)),
                Some(MoveId(3)),
                Some(MoveId(4)),
            ]),
            talent: TalentTable {
                hp: 10,
                spd: 7,
                ..Default::default()
            },
        }
    }

    #[test]
    fn empty_slot_reports_everything_but_talent_cap() {
        assert_eq!(
            validate_slot(&empty_slot()),
            vec![
                SlotViolation::MissingCreature,
                SlotViolation::MissingPersonality,
                SlotViolation::MissingLegacyType,
                SlotViolation::IncompleteMoves,
                SlotViolation::NoTalentBoost,
            ]
        );
        assert_eq!(slot_state(&empty_slot()), SlotState::Empty);
    }

    #[test]
    fn slot_with_only_creature_is_incomplete() {
        let slot = RosterSlot {
            creature_id: Some(CreatureId(7)),
            ..Default::default()
        };
        assert_eq!(
            validate_slot(&slot),
            vec![
                SlotViolation::MissingPersonality,
                SlotViolation::MissingLegacyType,
                SlotViolation::IncompleteMoves,
                SlotViolation::NoTalentBoost,
            ]
        );
        assert_eq!(slot_state(&slot), SlotState::Incomplete);
    }

    #[test]
    fn reports_too_many_boosts() {
        let mut slot = complete_slot(1);
        slot.talent = TalentTable {
            hp: 10,
            phy_atk: 10,
            mag_atk: 10,
            phy_def: 10,
            ..Default::default()
        };
        assert_eq!(
            validate_slot(&slot),
            vec![SlotViolation::TooManyTalentBoosts]
        );
    }

    #[test]
    fn complete_slot_has_no_violations() {
        assert_eq!(validate_slot(&complete_slot(1)), Vec::new());
        assert_eq!(slot_state(&complete_slot(1)), SlotState::Complete);
    }

    #[test]
    fn roster_needs_six_complete_slots_and_an_item() {
        let mut roster = Roster::from_slots(core::array::from_fn(|i| complete_slot(i as u32 + 1)));
        assert!(!is_roster_submittable(&roster));
        roster.set_chosen_item(Some(ItemId(4)));
        assert!(is_roster_submittable(&roster));
        roster.clear_slot(3);
        assert!(!is_roster_submittable(&roster));
    }

    #[test]
    fn violations_serialize_as_codes() {
        assert_eq!(
            serde_json::to_string(&SlotViolation::IncompleteMoves).unwrap(),
            "\"INCOMPLETE_MOVES\""
        );
        assert_eq!(
            serde_json::from_str::<SlotViolation>("\"NO_TALENT_BOOST\"").unwrap(),
            SlotViolation::NoTalentBoost
        );
    }
}
