#![cfg(test)]

use core::fmt::Debug;

use pretty_assertions::assert_eq;
use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Asserts that `json` parses into `expected`.
#[track_caller]
pub fn assert_parses_to<T>(json: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    match serde_json::from_str::<T>(json) {
        Ok(parsed) => assert_eq!(parsed, expected),
        Err(error) => panic!("{json} did not parse: {error}"),
    }
}

/// Asserts that `value` writes exactly `json`, and that `json` reads back as `value`.
#[track_caller]
pub fn assert_json_round_trip<T>(value: T, json: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    let written = serde_json::to_string(&value).unwrap_or_else(|error| panic!("{error}"));
    assert_eq!(written, json);
    assert_parses_to(json, value);
}

/// Same as [`assert_json_round_trip`], for values written as a bare label.
#[track_caller]
pub fn assert_label_round_trip<T>(value: T, label: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    assert_json_round_trip(value, &format!("\"{label}\""))
}

/// Asserts that a label (or one of its aliases) parses into `expected`.
#[track_caller]
pub fn assert_label_parses_to<T>(label: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    assert_parses_to(&format!("\"{label}\""), expected)
}
