use log::debug;
use teambuilder_data::{
    CreatureData,
    CreatureId,
    LegacyMoveMap,
    LegacyMoveSet,
    MoveId,
    TypeId,
};

use crate::{
    error::MutationError,
    slot::{
        MOVE_SLOTS,
        RosterSlot,
    },
};

/// Whether the slot's legacy type grants a legacy move.
///
/// Purely informational: a legacy type that grants nothing does not block submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyMoveStatus {
    /// No legacy type is chosen.
    NoLegacyType,
    /// The legacy type grants a move, which may or may not be equipped.
    Available { move_id: MoveId, equipped: bool },
    /// The legacy type grants no move for this creature.
    Unavailable,
}

/// Keeps a slot's legacy type and legacy move consistent for one creature.
///
/// A slot may hold at most one legacy move, and it must be the move granted by its current legacy
/// type. The resolver repairs the slot whenever the legacy type changes, and infers the legacy type
/// when a legacy move is chosen first.
#[derive(Debug, Clone)]
pub struct LegacyResolver<'i> {
    creature_id: Option<CreatureId>,
    legacy_moves: LegacyMoveMap,
    all_legacy_moves: &'i LegacyMoveSet,
    default_legacy_type: Option<TypeId>,
    leader_type: Option<TypeId>,
    is_leader_form: bool,
}

impl<'i> LegacyResolver<'i> {
    /// Creates a new resolver over a creature's legacy move map.
    ///
    /// Moves in `legacy_moves` are always treated as legacy moves, even if `all_legacy_moves` does
    /// not list them.
    pub fn new(legacy_moves: LegacyMoveMap, all_legacy_moves: &'i LegacyMoveSet) -> Self {
        Self {
            creature_id: None,
            legacy_moves,
            all_legacy_moves,
            default_legacy_type: None,
            leader_type: None,
            is_leader_form: false,
        }
    }

    /// Creates a resolver from full creature data.
    pub fn for_creature(
        creature: &CreatureData,
        all_legacy_moves: &'i LegacyMoveSet,
        leader_type: Option<TypeId>,
    ) -> Self {
        let mut resolver = Self::new(creature.legacy_move_map(), all_legacy_moves)
            .with_default_legacy_type(creature.default_legacy_type.as_ref().map(|typ| typ.id));
        resolver.creature_id = Some(creature.id);
        resolver.leader_type = leader_type;
        resolver.is_leader_form = creature.is_leader_form;
        resolver
    }

    /// Sets the legacy type a slot starts with when the creature is chosen.
    pub fn with_default_legacy_type(mut self, default_legacy_type: Option<TypeId>) -> Self {
        self.default_legacy_type = default_legacy_type;
        self
    }

    /// Marks the creature as a leader form, pinning its legacy type to the given type.
    pub fn with_leader_form(mut self, leader_type: TypeId) -> Self {
        self.leader_type = Some(leader_type);
        self.is_leader_form = true;
        self
    }

    /// The creature this resolver was built for.
    pub fn creature_id(&self) -> Option<CreatureId> {
        self.creature_id
    }

    /// The creature's legacy move map.
    pub fn legacy_moves(&self) -> &LegacyMoveMap {
        &self.legacy_moves
    }

    /// The legacy type every slot of this creature is pinned to, if any.
    pub fn pinned_type(&self) -> Option<TypeId> {
        if self.is_leader_form {
            self.leader_type
        } else {
            None
        }
    }

    /// Checks if the move is a legacy move.
    pub fn is_legacy_move(&self, move_id: MoveId) -> bool {
        self.all_legacy_moves.contains(move_id) || self.legacy_moves.contains_move(move_id)
    }

    /// The informational legacy move state of the slot.
    pub fn legacy_move_status(&self, slot: &RosterSlot) -> LegacyMoveStatus {
        match slot.legacy_type_id {
            None => LegacyMoveStatus::NoLegacyType,
            Some(legacy_type) => match self.legacy_moves.granted_by(legacy_type) {
                Some(move_id) => LegacyMoveStatus::Available {
                    move_id,
                    equipped: slot.moves.position_of(move_id).is_some(),
                },
                None => LegacyMoveStatus::Unavailable,
            },
        }
    }

    /// Applies the resolver's creature to the slot.
    ///
    /// Leader forms are pinned to the leader type. Otherwise, a slot without a legacy type (or one
    /// still pinned to the leader type from a previous creature) takes the creature's default legacy
    /// type. Legacy moves that no longer match are cleared.
    pub fn on_creature_chosen(&self, slot: &mut RosterSlot) -> LegacyMoveStatus {
        // A resolver built from a bare map keeps whatever creature the slot holds.
        let creature_changed = match self.creature_id {
            Some(creature_id) => {
                let changed = slot.creature_id != Some(creature_id);
                slot.creature_id = Some(creature_id);
                changed
            }
            None => false,
        };
        if let Some(pinned) = self.pinned_type() {
            slot.legacy_type_id = Some(pinned);
        } else if slot.legacy_type_id.is_none()
            || (creature_changed
                && self.leader_type.is_some()
                && slot.legacy_type_id == self.leader_type)
        {
            slot.legacy_type_id = self.default_legacy_type;
        }
        self.clear_stale_legacy_moves(slot);
        self.legacy_move_status(slot)
    }

    /// Changes the legacy type of the slot.
    ///
    /// Every equipped legacy move that is not granted by the new type is cleared. Leader forms
    /// ignore the requested type and stay pinned.
    pub fn on_legacy_type_changed(
        &self,
        slot: &mut RosterSlot,
        legacy_type: Option<TypeId>,
    ) -> LegacyMoveStatus {
        let legacy_type = match self.pinned_type() {
            Some(pinned) => {
                if legacy_type != Some(pinned) {
                    debug!("Ignoring legacy type change on leader form, which is pinned to {pinned}");
                }
                Some(pinned)
            }
            None => legacy_type,
        };
        slot.legacy_type_id = legacy_type;
        self.clear_stale_legacy_moves(slot);
        self.legacy_move_status(slot)
    }

    /// Equips a move at the given 1-based position.
    ///
    /// Choosing a legacy move on a slot without a legacy type selects the type that grants it. A
    /// move already equipped at another position is rejected, as is a legacy move that the slot's
    /// current legacy type does not grant, or that no legacy type of this creature grants. The slot
    /// is unchanged on error.
    ///
    /// Panics if the position is not between 1 and 4.
    pub fn on_move_chosen(
        &self,
        slot: &mut RosterSlot,
        position: usize,
        move_id: MoveId,
    ) -> Result<(), MutationError> {
        assert!(
            (1..=MOVE_SLOTS).contains(&position),
            "move position {position} is out of range (expected 1 through {MOVE_SLOTS})"
        );

        if slot.moves.get(position) == Some(move_id) {
            return Ok(());
        }
        if let Some(other) = slot.moves.position_of(move_id) {
            debug!("Rejecting move {move_id} at position {position}: already at position {other}");
            return Err(MutationError::DuplicateMove {
                move_id,
                position: other,
            });
        }

        let mut next = slot.clone();
        if let Some(pinned) = self.pinned_type() {
            next.legacy_type_id = Some(pinned);
        }

        if self.is_legacy_move(move_id) {
            match next.legacy_type_id {
                None => match self.legacy_moves.type_granting(move_id) {
                    Some(legacy_type) => {
                        debug!("Inferred legacy type {legacy_type} from legacy move {move_id}");
                        next.legacy_type_id = Some(legacy_type);
                    }
                    None => {
                        debug!("Rejecting legacy move {move_id}: no legacy type grants it");
                        return Err(MutationError::LegacyMoveNotGranted { move_id });
                    }
                },
                Some(legacy_type) => {
                    if self.legacy_moves.granted_by(legacy_type) != Some(move_id) {
                        debug!(
                            "Rejecting legacy move {move_id}: not granted by legacy type {legacy_type}"
                        );
                        return Err(MutationError::LegacyMoveMismatch {
                            move_id,
                            legacy_type,
                        });
                    }
                }
            }
        }

        next.moves.set(position, Some(move_id));
        self.clear_stale_legacy_moves(&mut next);
        *slot = next;
        Ok(())
    }

    /// Clears every equipped legacy move not granted by the slot's current legacy type.
    ///
    /// Returns the cleared positions.
    pub fn clear_stale_legacy_moves(&self, slot: &mut RosterSlot) -> Vec<usize> {
        let granted = slot
            .legacy_type_id
            .and_then(|legacy_type| self.legacy_moves.granted_by(legacy_type));
        let stale = slot
            .moves
            .entries()
            .filter_map(|(position, move_id)| Some((position, move_id?)))
            .filter(|(_, move_id)| self.is_legacy_move(*move_id) && Some(*move_id) != granted)
            .map(|(position, _)| position)
            .collect::<Vec<_>>();
        for position in &stale {
            debug!(
                "Clearing stale legacy move {:?} at position {position}",
                slot.moves.get(*position)
            );
            slot.moves.set(*position, None);
        }
        stale
    }
}
