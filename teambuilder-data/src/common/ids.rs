use core::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// The raw numeric value.
            pub fn get(&self) -> u32 {
                self.0
            }

            /// Converts a raw persisted value, where `0` means "not selected", into an optional
            /// id.
            pub fn from_raw(value: u32) -> Option<Self> {
                match value {
                    0 => None,
                    value => Some(Self(value)),
                }
            }

            /// Converts an optional id back into its persisted value.
            pub fn into_raw(id: Option<Self>) -> u32 {
                id.map(|id| id.0).unwrap_or(0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a base creature.
    CreatureId
);
numeric_id!(
    /// Identifier of a personality, which modifies stats.
    PersonalityId
);
numeric_id!(
    /// Identifier of an elemental type.
    TypeId
);
numeric_id!(
    /// Identifier of a move.
    MoveId
);
numeric_id!(
    /// Identifier of a team item.
    ItemId
);
