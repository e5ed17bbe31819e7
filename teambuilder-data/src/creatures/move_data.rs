use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveId,
    TypeData,
};

/// Data about a move, as listed in a creature's move pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: MoveId,
    pub name: String,
    /// Type of the move, if it has one.
    #[serde(default)]
    pub move_type: Option<TypeData>,
}
