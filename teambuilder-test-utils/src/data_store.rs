use ahash::HashMap;
use anyhow::Result;
use teambuilder_data::{
    CreatureData,
    CreatureId,
    DataStore,
    ItemData,
    ItemId,
    LegacyMoveSet,
    LocalDataStore,
    PersonalityData,
    PersonalityId,
    TypeData,
    TypeId,
};

use crate::test_data_dir;

/// Wrapper around a [`LocalDataStore`] for testing.
///
/// Reads the shared test data set, and allows fake creatures to be inserted exclusively for the
/// test.
#[derive(Debug)]
pub struct TestDataStore {
    local: LocalDataStore,
    fake_creatures: HashMap<CreatureId, CreatureData>,
}

impl TestDataStore {
    /// Creates a store over the test data set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            local: LocalDataStore::new(test_data_dir().join("data"))?,
            fake_creatures: HashMap::default(),
        })
    }

    /// Adds or overrides a creature.
    pub fn add_fake_creature(&mut self, creature: CreatureData) {
        self.fake_creatures.insert(creature.id, creature);
    }
}

impl DataStore for TestDataStore {
    fn get_creature(&self, id: CreatureId) -> Result<Option<CreatureData>> {
        match self.fake_creatures.get(&id) {
            Some(creature) => Ok(Some(creature.clone())),
            None => self.local.get_creature(id),
        }
    }

    fn get_personality(&self, id: PersonalityId) -> Result<Option<PersonalityData>> {
        self.local.get_personality(id)
    }

    fn get_item(&self, id: ItemId) -> Result<Option<ItemData>> {
        self.local.get_item(id)
    }

    fn get_type(&self, id: TypeId) -> Result<Option<TypeData>> {
        self.local.get_type(id)
    }

    fn get_type_by_name(&self, name: &str) -> Result<Option<TypeData>> {
        self.local.get_type_by_name(name)
    }

    fn all_legacy_moves(&self) -> Result<LegacyMoveSet> {
        let mut legacy_moves = self.local.all_legacy_moves()?;
        for creature in self.fake_creatures.values() {
            legacy_moves.extend_from_map(&creature.legacy_move_map());
        }
        Ok(legacy_moves)
    }
}
