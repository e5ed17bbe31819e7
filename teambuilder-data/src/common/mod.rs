mod ids;

pub use ids::{
    CreatureId,
    ItemId,
    MoveId,
    PersonalityId,
    TypeId,
};
