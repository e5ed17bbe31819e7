use thiserror::Error;

/// A roster that failed validation, with every problem found, in the order found.
///
/// Problems are user-facing sentences such as `Slot 2 is empty.`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
#[error("roster failed validation ({} problem(s)): {}", .problems.len(), .problems.join(" "))]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    pub fn new(problems: Vec<String>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Takes the problem list.
    pub fn into_problems(self) -> Vec<String> {
        self.problems
    }
}
