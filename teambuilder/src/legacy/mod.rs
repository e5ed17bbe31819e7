mod legacy_index;
mod resolver;

pub use legacy_index::LegacyIndex;
pub use resolver::{
    LegacyMoveStatus,
    LegacyResolver,
};
