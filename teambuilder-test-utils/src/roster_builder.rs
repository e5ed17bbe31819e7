use teambuilder::{
    roster::Roster,
    slot::{
        MoveSet,
        RosterSlot,
    },
};
use teambuilder_data::{
    CreatureId,
    ItemId,
    MoveId,
    PersonalityId,
    TalentTable,
    TypeId,
};

/// A complete slot for one of the plain creatures in the test data set.
///
/// Uses only moves every test creature can learn.
pub fn complete_slot(creature_id: u32, legacy_type_id: u32) -> RosterSlot {
    RosterSlot {
        creature_id: Some(CreatureId(creature_id)),
        personality_id: Some(PersonalityId(1)),
        legacy_type_id: Some(TypeId(legacy_type_id)),
        moves: MoveSet::new([
            Some(MoveId(1)),
            Some(MoveId(2)),
            Some(MoveId(4)),
            Some(MoveId(5)),
        ]),
        talent: TalentTable {
            hp: 10,
            phy_atk: 9,
            spd: 7,
            ..Default::default()
        },
    }
}

/// A roster that passes every check against the test data set.
pub fn submittable_roster() -> Roster {
    let mut roster = Roster::from_slots([
        complete_slot(7, 2),
        complete_slot(8, 3),
        complete_slot(9, 9),
        complete_slot(10, 4),
        complete_slot(11, 1),
        complete_slot(12, 2),
    ]);
    roster.set_name("Sunrise");
    roster.set_chosen_item(Some(ItemId(3)));
    roster
}
