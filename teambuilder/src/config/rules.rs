use std::collections::BTreeSet;

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    error::general_error,
    slot::MAX_BOOSTED_TALENTS,
};

fn default_allowed_talent_values() -> BTreeSet<u8> {
    BTreeSet::from_iter([0, 7, 8, 9, 10])
}

fn default_max_team_name_length() -> usize {
    16
}

fn default_leader_type_name() -> String {
    "Leader".to_owned()
}

/// Rules a roster must satisfy before it can be saved or analyzed.
///
/// These rules only affect the full submission check. The invariants every mutation preserves
/// (six slots, four moves, the talent cap) are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRules {
    /// Values a single talent boost may take.
    #[serde(default = "default_allowed_talent_values")]
    pub allowed_talent_values: BTreeSet<u8>,
    /// Maximum number of characters in a team name.
    #[serde(default = "default_max_team_name_length")]
    pub max_team_name_length: usize,
    /// Name of the legacy type every leader form is pinned to.
    #[serde(default = "default_leader_type_name")]
    pub leader_type_name: String,
    /// Can the same creature appear in more than one slot?
    #[serde(default)]
    pub allow_duplicate_creatures: bool,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            allowed_talent_values: default_allowed_talent_values(),
            max_team_name_length: default_max_team_name_length(),
            leader_type_name: default_leader_type_name(),
            allow_duplicate_creatures: false,
        }
    }
}

impl RosterRules {
    /// Validates the rules themselves.
    pub fn validate(&self) -> Result<()> {
        if !self.allowed_talent_values.contains(&0) {
            return Err(general_error(
                "Allowed Talent Values must include 0, or unboosted stats are impossible",
            ));
        }
        if self.allowed_talent_values.iter().all(|value| *value == 0) {
            return Err(general_error(
                "Allowed Talent Values must include at least one nonzero boost",
            ));
        }
        if self.max_team_name_length == 0 {
            return Err(general_error("Max Team Name Length must be at least 1"));
        }
        if self.leader_type_name.trim().is_empty() {
            return Err(general_error("Leader Type Name cannot be empty"));
        }
        Ok(())
    }

    /// Checks if a single boost value is allowed.
    pub fn is_allowed_talent_value(&self, value: u8) -> bool {
        self.allowed_talent_values.contains(&value)
    }

    /// The most stats a slot may boost.
    pub fn max_boosted_talents(&self) -> usize {
        MAX_BOOSTED_TALENTS
    }
}

#[cfg(test)]
mod rules_test {
    use pretty_assertions::assert_eq;

    use crate::config::RosterRules;

    #[test]
    fn default_rules_are_valid() {
        let rules = RosterRules::default();
        assert!(rules.validate().is_ok());
        assert!(rules.is_allowed_talent_value(10));
        assert!(!rules.is_allowed_talent_value(31));
        assert_eq!(rules.max_boosted_talents(), 3);
    }

    #[test]
    fn deserializes_with_defaults() {
        let rules = serde_json::from_str::<RosterRules>(r#"{"max_team_name_length": 20}"#).unwrap();
        assert_eq!(
            rules,
            RosterRules {
                max_team_name_length: 20,
                ..Default::default()
            }
        );
    }

    #[test]
    fn rejects_nonsensical_rules() {
        let rules = RosterRules {
            allowed_talent_values: [7, 8].into_iter().collect(),
            ..Default::default()
        };
        assert!(
            rules
                .validate()
                .unwrap_err()
                .to_string()
                .contains("must include 0")
        );

        let rules = RosterRules {
            allowed_talent_values: [0].into_iter().collect(),
            ..Default::default()
        };
        assert!(rules.validate().is_err());

        let rules = RosterRules {
            max_team_name_length: 0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());

        let rules = RosterRules {
            leader_type_name: "  ".to_owned(),
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }
}
