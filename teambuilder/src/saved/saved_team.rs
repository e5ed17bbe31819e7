use log::debug;
use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::ItemId;

use crate::{
    roster::{
        ROSTER_SIZE,
        Roster,
    },
    saved::SavedSlotRecord,
    slot::RosterSlot,
};

/// A persisted team, in the shape the team API accepts for saving and analysis.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTeamRecord {
    pub name: String,
    pub user_monsters: Vec<SavedSlotRecord>,
    /// `0` means no item is chosen.
    #[serde(default)]
    pub magic_item_id: u32,
}

impl Roster {
    /// Builds a roster from up to six saved slot records, in the order given.
    ///
    /// Positions beyond the supplied records are empty. Saved data is trusted, so legacy moves are
    /// not re-resolved; run the validator afterwards to surface any drift.
    ///
    /// Panics if more than six records are given.
    pub fn hydrate_from_saved(saved: &[SavedSlotRecord]) -> Self {
        assert!(
            saved.len() <= ROSTER_SIZE,
            "cannot hydrate {} saved slots into a roster of {ROSTER_SIZE}",
            saved.len()
        );
        debug!("Hydrating roster from {} saved slots", saved.len());
        Self::from_slots(core::array::from_fn(|index| {
            saved
                .get(index)
                .map(RosterSlot::from_saved)
                .unwrap_or_default()
        }))
    }

    /// Builds a roster from a saved team, including its name and item.
    pub fn hydrate_from_saved_team(team: &SavedTeamRecord) -> Self {
        let mut roster = Self::hydrate_from_saved(&team.user_monsters);
        roster.name = team.name.clone();
        roster.chosen_item = ItemId::from_raw(team.magic_item_id);
        roster
    }

    /// Converts all six slots into saved slot records.
    pub fn to_saved_slots(&self) -> Vec<SavedSlotRecord> {
        self.slots().iter().map(RosterSlot::to_saved).collect()
    }

    /// Converts the roster into a saved team.
    pub fn to_saved_team(&self) -> SavedTeamRecord {
        SavedTeamRecord {
            name: self.name.trim().to_owned(),
            user_monsters: self.to_saved_slots(),
            magic_item_id: ItemId::into_raw(self.chosen_item),
        }
    }
}
