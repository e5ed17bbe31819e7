mod roster_validator;
mod slot_validator;

pub use roster_validator::{
    RosterValidationProblems,
    RosterValidator,
};
pub use slot_validator::{
    SlotState,
    SlotViolation,
    is_roster_submittable,
    is_slot_complete,
    slot_state,
    validate_slot,
};
