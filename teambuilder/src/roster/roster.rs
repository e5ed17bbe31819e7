use log::debug;
use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::{
    ItemId,
    MoveId,
    TypeId,
};

use crate::{
    error::MutationError,
    legacy::{
        LegacyMoveStatus,
        LegacyResolver,
    },
    slot::{
        RosterSlot,
        SlotPatch,
        empty_slot,
    },
    validator::{
        SlotState,
        slot_state,
    },
};

/// The number of slots in a roster.
pub const ROSTER_SIZE: usize = 6;

fn check_index(index: usize) {
    assert!(
        index < ROSTER_SIZE,
        "slot index {index} is out of range (expected 0 through {})",
        ROSTER_SIZE - 1
    );
}

/// A full team: exactly six slots, plus a name and the chosen team item.
///
/// Slots are never added or removed, only filled and cleared. All changes to slots go through the
/// mutation methods here, each of which either applies completely or leaves the roster unchanged.
/// Slot indices are 0-based; an index of 6 or more is a programming error and panics.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Team name.
    pub name: String,
    /// The team item.
    pub chosen_item: Option<ItemId>,
    slots: [RosterSlot; ROSTER_SIZE],
}

/// Creates a roster with six empty slots, no name, and no item.
pub fn empty_roster() -> Roster {
    Roster::default()
}

impl Roster {
    /// Creates a roster from slots in position order.
    pub fn from_slots(slots: [RosterSlot; ROSTER_SIZE]) -> Self {
        Self {
            name: String::new(),
            chosen_item: None,
            slots,
        }
    }

    /// All six slots, in position order.
    pub fn slots(&self) -> &[RosterSlot; ROSTER_SIZE] {
        &self.slots
    }

    /// The slot at the given index.
    pub fn slot(&self, index: usize) -> &RosterSlot {
        check_index(index);
        &self.slots[index]
    }

    /// The number of slots with a creature.
    pub fn filled_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// The completion state of every slot.
    pub fn slot_states(&self) -> [SlotState; ROSTER_SIZE] {
        self.slots.each_ref().map(slot_state)
    }

    /// Sets the team name.
    pub fn set_name<S>(&mut self, name: S)
    where
        S: Into<String>,
    {
        self.name = name.into();
    }

    /// Sets or clears the team item.
    pub fn set_chosen_item(&mut self, item: Option<ItemId>) {
        self.chosen_item = item;
    }

    /// Replaces the whole roster with an empty one.
    pub fn reset(&mut self) {
        *self = empty_roster();
    }

    /// Merges a partial update into a slot.
    ///
    /// Rejected if the update would boost too many stats or equip the same move twice, in which
    /// case the roster is unchanged. This does not reason about legacy moves; route legacy type
    /// and move picks through [`Self::on_legacy_type_changed`] and [`Self::on_move_chosen`].
    pub fn set_slot_field(&mut self, index: usize, patch: &SlotPatch) -> Result<(), MutationError> {
        check_index(index);
        match patch.apply_to(&self.slots[index]) {
            Ok(slot) => {
                self.slots[index] = slot;
                Ok(())
            }
            Err(error) => {
                debug!("Rejected update to slot {index}: {error}");
                Err(error)
            }
        }
    }

    /// Resets a slot to an empty slot.
    pub fn clear_slot(&mut self, index: usize) {
        check_index(index);
        self.slots[index] = empty_slot();
    }

    /// Swaps the entire contents of two slots.
    pub fn move_slot(&mut self, from_index: usize, to_index: usize) {
        check_index(from_index);
        check_index(to_index);
        self.slots.swap(from_index, to_index);
    }

    /// Chooses the resolver's creature for a slot.
    ///
    /// See [`LegacyResolver::on_creature_chosen`].
    pub fn on_creature_chosen(
        &mut self,
        index: usize,
        resolver: &LegacyResolver<'_>,
    ) -> LegacyMoveStatus {
        check_index(index);
        resolver.on_creature_chosen(&mut self.slots[index])
    }

    /// Changes the legacy type of a slot, clearing any legacy move it no longer grants.
    ///
    /// See [`LegacyResolver::on_legacy_type_changed`].
    pub fn on_legacy_type_changed(
        &mut self,
        index: usize,
        legacy_type: Option<TypeId>,
        resolver: &LegacyResolver<'_>,
    ) -> LegacyMoveStatus {
        check_index(index);
        resolver.on_legacy_type_changed(&mut self.slots[index], legacy_type)
    }

    /// Equips a move on a slot at the given 1-based move position.
    ///
    /// See [`LegacyResolver::on_move_chosen`].
    pub fn on_move_chosen(
        &mut self,
        index: usize,
        position: usize,
        move_id: MoveId,
        resolver: &LegacyResolver<'_>,
    ) -> Result<(), MutationError> {
        check_index(index);
        resolver
            .on_move_chosen(&mut self.slots[index], position, move_id)
            .inspect_err(|error| debug!("Rejected move for slot {index}: {error}"))
    }
}
