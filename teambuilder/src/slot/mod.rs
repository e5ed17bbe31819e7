mod move_set;
mod roster_slot;
mod slot_patch;

pub use move_set::{
    MOVE_SLOTS,
    MoveSet,
};
pub use roster_slot::{
    MAX_BOOSTED_TALENTS,
    RosterSlot,
    empty_slot,
};
pub use slot_patch::SlotPatch;
