//! Roster validation and legacy-consistency engine for a six-slot team builder.
//!
//! A [`roster::Roster`] holds six [`slot::RosterSlot`]s. Every change goes through a mutation
//! method that either applies completely or is rejected with a [`error::MutationError`]. The
//! [`legacy::LegacyResolver`] keeps each slot's legacy type and legacy move consistent, and the
//! [`validator`] module reports what keeps a roster from being submitted.

extern crate alloc;

pub mod config;
pub mod error;
pub mod legacy;
pub mod roster;
pub mod saved;
pub mod slot;
pub mod validator;

pub use teambuilder_data as data;
