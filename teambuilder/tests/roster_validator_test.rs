use pretty_assertions::assert_eq;
use serde::Deserialize;
use teambuilder::{
    config::RosterRules,
    legacy::LegacyIndex,
    roster::Roster,
    saved::SavedTeamRecord,
    validator::{
        RosterValidator,
        is_roster_submittable,
    },
};
use teambuilder_test_utils::{
    TestDataStore,
    read_test_cases,
    setup_test_environment,
    submittable_roster,
};

#[derive(Deserialize)]
struct RosterValidatorTestCase {
    team: SavedTeamRecord,
    #[serde(default)]
    problems: Vec<String>,
}

fn problems(result: Result<(), teambuilder::error::ValidationError>) -> Vec<String> {
    match result {
        Ok(()) => Vec::new(),
        Err(error) => error.into_problems(),
    }
}

#[test]
fn validates_saved_teams_against_test_data() {
    setup_test_environment();
    let store = TestDataStore::new().unwrap();
    let rules = RosterRules::default();
    let legacy_index = LegacyIndex::from_store(&store, &rules).unwrap();
    let validator = RosterValidator::new(&rules).with_data(&store, &legacy_index);

    let test_cases =
        read_test_cases::<RosterValidatorTestCase>("roster_validator_cases.json").unwrap();
    assert!(!test_cases.is_empty());
    for (name, test_case) in test_cases {
        let roster = Roster::hydrate_from_saved_team(&test_case.team);
        assert_eq!(
            problems(validator.validate_roster(&roster)),
            test_case.problems,
            "{name}"
        );
    }
}

#[test]
fn submittable_roster_passes_full_check() {
    setup_test_environment();
    let store = TestDataStore::new().unwrap();
    let rules = RosterRules::default();
    let legacy_index = LegacyIndex::from_store(&store, &rules).unwrap();
    let roster = submittable_roster();
    assert!(is_roster_submittable(&roster));
    assert_eq!(
        RosterValidator::new(&rules)
            .with_data(&store, &legacy_index)
            .validate_roster(&roster),
        Ok(())
    );
}

#[test]
fn submittable_roster_may_still_fail_full_check() {
    setup_test_environment();
    let rules = RosterRules::default();
    let mut roster = submittable_roster();
    roster.set_name("");
    assert!(is_roster_submittable(&roster));
    assert_eq!(
        problems(RosterValidator::new(&rules).validate_roster(&roster)),
        vec!["Team name cannot be empty."]
    );
}

#[test]
fn validation_error_lists_every_problem() {
    setup_test_environment();
    let rules = RosterRules::default();
    let mut roster = submittable_roster();
    roster.clear_slot(0);
    roster.set_chosen_item(None);
    let error = RosterValidator::new(&rules)
        .validate_roster(&roster)
        .unwrap_err();
    assert_eq!(error.len(), 2);
    assert_eq!(
        error.to_string(),
        "roster failed validation (2 problem(s)): Slot 1 is empty. Team must have a team item."
    );
}
