use std::collections::BTreeMap;

use log::warn;
use teambuilder_data::{
    CreatureData,
    CreatureId,
    DataStore,
};

use crate::{
    config::RosterRules,
    error::ValidationError,
    legacy::LegacyIndex,
    roster::Roster,
    slot::RosterSlot,
    validator::validate_slot,
};

/// Problems produced by roster validation.
///
/// Converted to [`ValidationError`] when returned to callers.
#[derive(Debug, Default)]
pub struct RosterValidationProblems {
    pub problems: Vec<String>,
}

impl RosterValidationProblems {
    pub fn add_problem(&mut self, problem: String) {
        self.problems.push(problem)
    }

    pub fn merge(&mut self, mut other: Self) {
        self.problems.append(&mut other.problems);
    }
}

impl From<RosterValidationProblems> for Result<(), ValidationError> {
    fn from(value: RosterValidationProblems) -> Self {
        if value.problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(value.problems))
        }
    }
}

/// Reference data the validator checks slots against.
#[derive(Clone, Copy)]
struct ReferenceData<'v> {
    store: &'v dyn DataStore,
    legacy_index: &'v LegacyIndex,
}

/// An object used for checking a whole roster before it is saved.
///
/// Every slot is checked for completeness and for values the rules disallow. When reference data
/// is attached, slots are also checked against their creature, which catches saved teams that
/// drifted after the legacy rules changed.
pub struct RosterValidator<'v> {
    /// Roster rules.
    pub rules: &'v RosterRules,
    data: Option<ReferenceData<'v>>,
}

impl<'v> RosterValidator<'v> {
    /// Creates a new [`RosterValidator`] that only checks the roster against the rules.
    pub fn new(rules: &'v RosterRules) -> Self {
        Self { rules, data: None }
    }

    /// Attaches reference data, so that slots are checked against their creature.
    pub fn with_data(mut self, store: &'v dyn DataStore, legacy_index: &'v LegacyIndex) -> Self {
        self.data = Some(ReferenceData {
            store,
            legacy_index,
        });
        self
    }

    /// Validates an entire roster for saving.
    pub fn validate_roster(&self, roster: &Roster) -> Result<(), ValidationError> {
        self.validate_roster_internal(roster).into()
    }

    fn validate_roster_internal(&self, roster: &Roster) -> RosterValidationProblems {
        let mut result = RosterValidationProblems::default();

        for (index, slot) in roster.slots().iter().enumerate() {
            result.merge(self.validate_slot(index + 1, slot));
        }

        let name = roster.name.trim();
        if name.is_empty() {
            result.add_problem("Team name cannot be empty.".to_owned());
        }
        let name_length = name.chars().count();
        let max_name_length = self.rules.max_team_name_length;
        if name_length > max_name_length {
            result.add_problem(format!(
                "Team name \"{name}\" is too long (should be {max_name_length} characters or fewer)."
            ));
        }

        match roster.chosen_item {
            None => result.add_problem("Team must have a team item.".to_owned()),
            Some(item) => {
                if let Some(data) = self.data {
                    match data.store.get_item(item) {
                        Ok(Some(_)) => (),
                        Ok(None) => result.add_problem(format!("Item {item} does not exist.")),
                        Err(error) => result
                            .add_problem(format!("Failed to look up item {item}: {error}.")),
                    }
                }
            }
        }

        if !self.rules.allow_duplicate_creatures {
            result.merge(self.validate_unique_creatures(roster));
        }

        result
    }

    fn validate_unique_creatures(&self, roster: &Roster) -> RosterValidationProblems {
        let mut result = RosterValidationProblems::default();
        let mut positions = BTreeMap::<CreatureId, Vec<usize>>::new();
        for (index, slot) in roster.slots().iter().enumerate() {
            if let Some(creature_id) = slot.creature_id {
                positions.entry(creature_id).or_default().push(index + 1);
            }
        }
        for (creature_id, positions) in positions {
            if positions.len() > 1 {
                let positions = positions
                    .iter()
                    .map(|position| position.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                result.add_problem(format!(
                    "Creature {creature_id} appears more than once (slots {positions})."
                ));
            }
        }
        result
    }

    /// Validates a single slot, identified by its 1-based position.
    fn validate_slot(&self, position: usize, slot: &RosterSlot) -> RosterValidationProblems {
        let mut result = RosterValidationProblems::default();

        if slot.is_empty() {
            result.add_problem(format!("Slot {position} is empty."));
            return result;
        }

        let violations = validate_slot(slot);
        if !violations.is_empty() {
            let violations = violations
                .iter()
                .map(|violation| violation.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            result.add_problem(format!("Slot {position} is incomplete ({violations})."));
        }

        if let Some((move_id, move_position)) = slot.moves.first_duplicate() {
            result.add_problem(format!(
                "Slot {position} has move {move_id} equipped more than once (again in move slot {move_position})."
            ));
        }

        for (stat, value) in slot.talent.entries() {
            if !self.rules.is_allowed_talent_value(value) {
                let allowed = self
                    .rules
                    .allowed_talent_values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                result.add_problem(format!(
                    "Slot {position} has a {stat} boost of {value} (allowed values are {allowed})."
                ));
            }
        }

        if let Some(data) = self.data {
            result.merge(self.validate_slot_data(data, position, slot));
        }

        result
    }

    fn validate_slot_data(
        &self,
        data: ReferenceData<'_>,
        position: usize,
        slot: &RosterSlot,
    ) -> RosterValidationProblems {
        let mut result = RosterValidationProblems::default();

        if let Some(personality_id) = slot.personality_id {
            match data.store.get_personality(personality_id) {
                Ok(Some(_)) => (),
                Ok(None) => result.add_problem(format!(
                    "Personality {personality_id} (in slot {position}) does not exist."
                )),
                Err(error) => result.add_problem(format!(
                    "Failed to look up personality {personality_id}: {error}."
                )),
            }
        }

        if let Some(legacy_type) = slot.legacy_type_id {
            match data.store.get_type(legacy_type) {
                Ok(Some(_)) => (),
                Ok(None) => result.add_problem(format!(
                    "Legacy type {legacy_type} (in slot {position}) does not exist."
                )),
                Err(error) => result.add_problem(format!(
                    "Failed to look up type {legacy_type}: {error}."
                )),
            }
        }

        let Some(creature_id) = slot.creature_id else {
            return result;
        };
        let creature = match data.store.get_creature(creature_id) {
            Ok(Some(creature)) => creature,
            Ok(None) => {
                result.add_problem(format!(
                    "Creature {creature_id} (in slot {position}) does not exist."
                ));
                return result;
            }
            Err(error) => {
                result.add_problem(format!(
                    "Failed to look up creature {creature_id}: {error}."
                ));
                return result;
            }
        };

        result.merge(self.validate_legacy_consistency(data, position, slot, &creature));
        result
    }

    fn validate_legacy_consistency(
        &self,
        data: ReferenceData<'_>,
        position: usize,
        slot: &RosterSlot,
        creature: &CreatureData,
    ) -> RosterValidationProblems {
        let mut result = RosterValidationProblems::default();
        let resolver = data.legacy_index.resolver_for(creature);

        if let Some(pinned) = resolver.pinned_type() {
            if slot.legacy_type_id != Some(pinned) {
                warn!(
                    "Slot {position} holds leader form {} without the leader legacy type",
                    creature.id
                );
                result.add_problem(format!(
                    "{} (in slot {position}) is a leader form and must have legacy type {pinned}.",
                    creature.name
                ));
            }
        }

        let granted = slot
            .legacy_type_id
            .and_then(|legacy_type| resolver.legacy_moves().granted_by(legacy_type));
        for (move_position, move_id) in slot.moves.entries() {
            let Some(move_id) = move_id else {
                continue;
            };
            if resolver.is_legacy_move(move_id) {
                if Some(move_id) != granted {
                    warn!(
                        "Slot {position} has stale legacy move {move_id} in move slot {move_position}"
                    );
                    result.add_problem(format!(
                        "{} (in slot {position}) has legacy move {move_id}, which its legacy type does not grant.",
                        creature.name
                    ));
                }
            } else if !creature.can_learn(move_id) {
                result.add_problem(format!(
                    "{} (in slot {position}) cannot learn move {move_id}.",
                    creature.name
                ));
            }
        }

        result
    }
}
