use serde::{
    Deserialize,
    Serialize,
};

use crate::ItemId;

/// Data about a team item.
///
/// A team brings exactly one item, chosen at the team level rather than per creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
