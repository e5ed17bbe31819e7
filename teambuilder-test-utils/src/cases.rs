use std::{
    fs::File,
    path::PathBuf,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Result,
};
use serde::de::DeserializeOwned;

/// The directory holding test cases and the test data set.
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("teambuilder")
        .join("test-data")
}

/// Reads a JSON object of named test cases.
pub fn read_test_cases<T: DeserializeOwned>(file: &str) -> Result<HashMap<String, T>> {
    serde_json::from_reader(
        File::open(test_data_dir().join(file))
            .context(format!("failed to read test cases from {file}"))?,
    )
    .context(format!("failed to parse test cases from {file}"))
}
