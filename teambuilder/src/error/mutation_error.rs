use teambuilder_data::{
    MoveId,
    TypeId,
};
use thiserror::Error;

/// A rejected roster mutation.
///
/// The roster is left unchanged whenever one of these is returned. Callers are expected to show the
/// reason to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The mutation would boost more stats than allowed.
    #[error("cannot boost {count} stats (at most {max} may be boosted)")]
    TalentCapExceeded { count: usize, max: usize },
    /// The move is already equipped in another move slot.
    #[error("move {move_id} is already equipped in move slot {position}")]
    DuplicateMove { move_id: MoveId, position: usize },
    /// The legacy move is not the one granted by the slot's active legacy type.
    #[error("legacy move {move_id} is not granted by legacy type {legacy_type}")]
    LegacyMoveMismatch { move_id: MoveId, legacy_type: TypeId },
    /// The legacy move is not granted by any legacy type of the slot's creature.
    #[error("legacy move {move_id} is not granted by any legacy type of this creature")]
    LegacyMoveNotGranted { move_id: MoveId },
}

impl MutationError {
    /// Stable machine-readable code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TalentCapExceeded { .. } => "TALENT_CAP_EXCEEDED",
            Self::DuplicateMove { .. } => "DUPLICATE_MOVE",
            Self::LegacyMoveMismatch { .. } => "LEGACY_MOVE_MISMATCH",
            Self::LegacyMoveNotGranted { .. } => "LEGACY_MOVE_NOT_GRANTED",
        }
    }
}
