mod rules;

pub use rules::RosterRules;
