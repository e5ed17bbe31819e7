use serde::{
    Deserialize,
    Serialize,
};

use crate::TypeId;

/// An elemental type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeData {
    pub id: TypeId,
    pub name: String,
}
