use anyhow::Result;

use crate::{
    CreatureData,
    CreatureId,
    ItemData,
    ItemId,
    LegacyMoveSet,
    PersonalityData,
    PersonalityId,
    TypeData,
    TypeId,
};

/// Collection of tables for all reference data a team builder needs.
///
/// This trait can be implemented for different data sources, such as a remote API or disk. Records
/// are validated once when they enter the store; callers never probe their shape again.
pub trait DataStore: Send + Sync {
    /// Gets a creature by ID.
    fn get_creature(&self, id: CreatureId) -> Result<Option<CreatureData>>;
    /// Gets a personality by ID.
    fn get_personality(&self, id: PersonalityId) -> Result<Option<PersonalityData>>;
    /// Gets an item by ID.
    fn get_item(&self, id: ItemId) -> Result<Option<ItemData>>;
    /// Gets a type by ID.
    fn get_type(&self, id: TypeId) -> Result<Option<TypeData>>;
    /// Gets a type by name, ignoring case.
    fn get_type_by_name(&self, name: &str) -> Result<Option<TypeData>>;

    /// Gets every legacy move across all creatures.
    fn all_legacy_moves(&self) -> Result<LegacyMoveSet>;
}
