use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CreatureId,
    LegacyMoveData,
    LegacyMoveMap,
    MoveData,
    MoveId,
    TypeData,
};

fn default_form() -> String {
    "default".to_owned()
}

/// Data about a particular creature.
///
/// Creature data is common to every slot that picks this creature. Data chosen by the player (such
/// as personality, talents, or the equipped moves) does not belong here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    pub id: CreatureId,
    /// Name of the creature, excluding the form.
    pub name: String,
    /// Form name.
    #[serde(default = "default_form")]
    pub form: String,
    /// The primary type.
    pub main_type: TypeData,
    /// The secondary type, if it exists.
    #[serde(default)]
    pub sub_type: Option<TypeData>,
    /// The legacy type a new slot starts with when this creature is chosen.
    #[serde(default)]
    pub default_legacy_type: Option<TypeData>,
    /// Is the creature in its final stage, so it may take the leader legacy type?
    #[serde(default)]
    pub leader_potential: bool,
    /// Is this the leader form of the creature?
    ///
    /// Leader forms always carry the leader legacy type.
    #[serde(default)]
    pub is_leader_form: bool,
    /// Moves the creature can learn normally.
    #[serde(default)]
    pub move_pool: Vec<MoveData>,
    /// Moves granted by each legacy type.
    #[serde(default)]
    pub legacy_moves: Vec<LegacyMoveData>,
}

impl CreatureData {
    /// Builds the legacy move map for this creature.
    ///
    /// Entries recorded for a different creature are skipped.
    pub fn legacy_move_map(&self) -> LegacyMoveMap {
        LegacyMoveMap::from_iter(
            self.legacy_moves
                .iter()
                .filter(|legacy| legacy.monster_id == self.id)
                .map(|legacy| (legacy.type_id, legacy.move_id)),
        )
    }

    /// Checks if the move is in the creature's move pool.
    pub fn can_learn(&self, move_id: MoveId) -> bool {
        self.move_pool.iter().any(|mov| mov.id == move_id)
    }
}

#[cfg(test)]
mod creature_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        CreatureData,
        CreatureId,
        MoveId,
        TypeId,
    };

    fn creature() -> CreatureData {
        serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Flamelet",
                "main_type": { "id": 2, "name": "Fire" },
                "leader_potential": true,
                "preferred_attack_style": "Magic",
                "move_pool": [
                    { "id": 1, "name": "Ember" },
                    { "id": 2, "name": "Tackle", "move_type": { "id": 1, "name": "Normal" } }
                ],
                "legacy_moves": [
                    { "monster_id": 7, "type_id": 2, "move_id": 101 },
                    { "monster_id": 7, "type_id": 3, "move_id": 102 },
                    { "monster_id": 8, "type_id": 4, "move_id": 103 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_with_defaults() {
        let creature = creature();
        assert_eq!(creature.id, CreatureId(7));
        assert_eq!(creature.form, "default");
        assert_eq!(creature.sub_type, None);
        assert!(!creature.is_leader_form);
        assert!(creature.can_learn(MoveId(2)));
        assert!(!creature.can_learn(MoveId(101)));
    }

    #[test]
    fn builds_legacy_move_map_for_own_entries() {
        let map = creature().legacy_move_map();
        assert_eq!(map.granted_by(TypeId(2)), Some(MoveId(101)));
        assert_eq!(map.granted_by(TypeId(3)), Some(MoveId(102)));
        assert_eq!(map.granted_by(TypeId(4)), None);
        assert_eq!(map.len(), 2);
    }
}
