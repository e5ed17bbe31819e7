mod creature_data;
mod item_data;
mod legacy_moves;
mod move_data;
mod personality_data;
mod type_data;

pub use creature_data::CreatureData;
pub use item_data::ItemData;
pub use legacy_moves::{
    LegacyMoveData,
    LegacyMoveMap,
    LegacyMoveSet,
};
pub use move_data::MoveData;
pub use personality_data::PersonalityData;
pub use type_data::TypeData;
