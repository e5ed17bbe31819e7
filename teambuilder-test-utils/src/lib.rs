mod cases;
mod data_store;
mod roster_builder;
mod setup;

pub use cases::{
    read_test_cases,
    test_data_dir,
};
pub use data_store::TestDataStore;
pub use roster_builder::{
    complete_slot,
    submittable_roster,
};
pub use setup::setup_test_environment;
