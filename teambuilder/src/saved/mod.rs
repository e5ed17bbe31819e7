mod saved_slot;
mod saved_team;

pub use saved_slot::SavedSlotRecord;
pub use saved_team::SavedTeamRecord;
