use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::MoveId;

/// The number of moves equipped on a slot.
pub const MOVE_SLOTS: usize = 4;

/// The four equipped moves of a slot.
///
/// Always holds exactly four entries; an unselected move is `None`, never a missing entry. Methods
/// taking a `position` are 1-based (move slot 1 through 4), matching how moves are persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSet([Option<MoveId>; MOVE_SLOTS]);

fn index_of(position: usize) -> usize {
    assert!(
        (1..=MOVE_SLOTS).contains(&position),
        "move position {position} is out of range (expected 1 through {MOVE_SLOTS})"
    );
    position - 1
}

impl MoveSet {
    /// Creates a new move set.
    pub fn new(moves: [Option<MoveId>; MOVE_SLOTS]) -> Self {
        Self(moves)
    }

    /// The move at the given position.
    ///
    /// Panics if the position is not between 1 and 4.
    pub fn get(&self, position: usize) -> Option<MoveId> {
        self.0[index_of(position)]
    }

    /// Sets the move at the given position.
    ///
    /// Panics if the position is not between 1 and 4.
    pub fn set(&mut self, position: usize, move_id: Option<MoveId>) {
        self.0[index_of(position)] = move_id;
    }

    /// Iterates over all (position, move) entries.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Option<MoveId>)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, move_id)| (index + 1, *move_id))
    }

    /// Iterates over all selected moves.
    pub fn selected(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.0.iter().filter_map(|move_id| *move_id)
    }

    /// The position holding the given move, if any.
    pub fn position_of(&self, move_id: MoveId) -> Option<usize> {
        self.0
            .iter()
            .position(|selected| *selected == Some(move_id))
            .map(|index| index + 1)
    }

    /// Checks if all four moves are selected.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|move_id| move_id.is_some())
    }

    /// Checks if no move is selected.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|move_id| move_id.is_none())
    }

    /// Finds a move selected at more than one position.
    ///
    /// Returns the move and the position of its second occurrence.
    pub fn first_duplicate(&self) -> Option<(MoveId, usize)> {
        self.entries().find_map(|(position, move_id)| {
            let move_id = move_id?;
            match self.position_of(move_id) {
                Some(first) if first != position => Some((move_id, position)),
                _ => None,
            }
        })
    }

    /// The raw moves.
    pub fn as_array(&self) -> &[Option<MoveId>; MOVE_SLOTS] {
        &self.0
    }
}

impl From<[Option<MoveId>; MOVE_SLOTS]> for MoveSet {
    fn from(value: [Option<MoveId>; MOVE_SLOTS]) -> Self {
        Self::new(value)
    }
}
