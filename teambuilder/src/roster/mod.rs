mod roster;

pub use roster::{
    ROSTER_SIZE,
    Roster,
    empty_roster,
};
