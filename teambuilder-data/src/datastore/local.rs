use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;
use unicase::UniCase;

use crate::{
    CreatureData,
    CreatureId,
    DataStore,
    ItemData,
    ItemId,
    LegacyMoveSet,
    PersonalityData,
    PersonalityId,
    TypeData,
    TypeId,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Each table is a JSON file holding a list of records.
#[derive(Debug)]
pub struct LocalDataStore {
    root: PathBuf,
    pub creatures: HashMap<CreatureId, CreatureData>,
    pub personalities: HashMap<PersonalityId, PersonalityData>,
    pub items: HashMap<ItemId, ItemData>,
    pub types: HashMap<TypeId, TypeData>,
    legacy_moves: LegacyMoveSet,
}

impl LocalDataStore {
    /// Creatures file name.
    pub const CREATURES_FILE: &str = "creatures.json";
    /// Personalities file name.
    pub const PERSONALITIES_FILE: &str = "personalities.json";
    /// Items file name.
    pub const ITEMS_FILE: &str = "items.json";
    /// Types file name.
    pub const TYPES_FILE: &str = "types.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }
        let mut store = Self {
            root,
            creatures: HashMap::default(),
            personalities: HashMap::default(),
            items: HashMap::default(),
            types: HashMap::default(),
            legacy_moves: LegacyMoveSet::new(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The root directory data is read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn initialize(&mut self) -> Result<()> {
        self.creatures = self
            .read_table::<CreatureData>(Self::CREATURES_FILE)?
            .into_iter()
            .map(|creature| (creature.id, creature))
            .collect();
        self.personalities = self
            .read_table::<PersonalityData>(Self::PERSONALITIES_FILE)?
            .into_iter()
            .map(|personality| (personality.id, personality))
            .collect();
        self.items = self
            .read_table::<ItemData>(Self::ITEMS_FILE)?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();
        self.types = self
            .read_table::<TypeData>(Self::TYPES_FILE)?
            .into_iter()
            .map(|typ| (typ.id, typ))
            .collect();

        for creature in self.creatures.values() {
            self.legacy_moves
                .extend_from_map(&creature.legacy_move_map());
        }

        Ok(())
    }

    fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        let path_name = path.to_string_lossy().to_string();
        serde_json::from_reader(
            File::open(&path).context(format!("{path_name} could not be opened"))?,
        )
        .context(format!("failed to parse {file} from {path_name}"))
    }
}

impl DataStore for LocalDataStore {
    fn get_creature(&self, id: CreatureId) -> Result<Option<CreatureData>> {
        Ok(self.creatures.get(&id).cloned())
    }

    fn get_personality(&self, id: PersonalityId) -> Result<Option<PersonalityData>> {
        Ok(self.personalities.get(&id).cloned())
    }

    fn get_item(&self, id: ItemId) -> Result<Option<ItemData>> {
        Ok(self.items.get(&id).cloned())
    }

    fn get_type(&self, id: TypeId) -> Result<Option<TypeData>> {
        Ok(self.types.get(&id).cloned())
    }

    fn get_type_by_name(&self, name: &str) -> Result<Option<TypeData>> {
        let name = UniCase::new(name);
        Ok(self
            .types
            .values()
            .find(|typ| UniCase::new(typ.name.as_str()) == name)
            .cloned())
    }

    fn all_legacy_moves(&self) -> Result<LegacyMoveSet> {
        Ok(self.legacy_moves.clone())
    }
}
