extern crate alloc;

mod common;
mod creatures;
mod datastore;
mod talents;

#[cfg(test)]
pub mod test_util;

pub use common::*;
pub use creatures::*;
pub use datastore::*;
pub use talents::*;
