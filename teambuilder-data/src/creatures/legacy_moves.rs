use std::collections::BTreeMap;

use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CreatureId,
    MoveId,
    TypeId,
};

/// A single legacy move entry: choosing `type_id` as the legacy type of `monster_id` grants
/// `move_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMoveData {
    pub monster_id: CreatureId,
    pub type_id: TypeId,
    pub move_id: MoveId,
}

/// The legacy moves a single creature can receive, keyed by legacy type.
///
/// A type grants at most one move. Types that grant nothing are simply absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMoveMap {
    by_type: BTreeMap<TypeId, MoveId>,
}

impl LegacyMoveMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The move granted by the given legacy type, if any.
    pub fn granted_by(&self, type_id: TypeId) -> Option<MoveId> {
        self.by_type.get(&type_id).cloned()
    }

    /// The legacy type that grants the given move.
    ///
    /// If several types grant the same move, the type with the lowest identifier is returned, so
    /// the lookup is deterministic.
    pub fn type_granting(&self, move_id: MoveId) -> Option<TypeId> {
        self.by_type
            .iter()
            .find(|(_, granted)| **granted == move_id)
            .map(|(type_id, _)| *type_id)
    }

    /// Checks if any legacy type grants the given move.
    pub fn contains_move(&self, move_id: MoveId) -> bool {
        self.by_type.values().any(|granted| *granted == move_id)
    }

    /// Iterates over all (type, move) entries, ordered by type.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, MoveId)> + '_ {
        self.by_type.iter().map(|(type_id, move_id)| (*type_id, *move_id))
    }

    /// The number of types that grant a move.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Checks if no type grants a move.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl FromIterator<(TypeId, MoveId)> for LegacyMoveMap {
    fn from_iter<T: IntoIterator<Item = (TypeId, MoveId)>>(iter: T) -> Self {
        Self {
            by_type: iter.into_iter().collect(),
        }
    }
}

/// The set of every legacy move, across all creatures and types.
///
/// Used for quick membership tests: a move in this set may only be equipped as the legacy move of
/// the active legacy type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyMoveSet {
    moves: HashSet<MoveId>,
}

impl LegacyMoveSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the move is a legacy move.
    pub fn contains(&self, move_id: MoveId) -> bool {
        self.moves.contains(&move_id)
    }

    /// Adds every move granted by the given map.
    pub fn extend_from_map(&mut self, map: &LegacyMoveMap) {
        self.moves.extend(map.iter().map(|(_, move_id)| move_id));
    }

    /// The number of legacy moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl FromIterator<MoveId> for LegacyMoveSet {
    fn from_iter<T: IntoIterator<Item = MoveId>>(iter: T) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl From<&LegacyMoveMap> for LegacyMoveSet {
    fn from(value: &LegacyMoveMap) -> Self {
        Self::from_iter(value.iter().map(|(_, move_id)| move_id))
    }
}
