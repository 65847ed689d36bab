use crate::capture::CaptureError;
use crate::evomaster::{count_fault_tests, count_non_null_assertions, split_tests, test_operation};
use crate::operation::OperationName;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const SUCCESSES_PATTERN: &str = "*_successes_Test.java";
pub const FAULTS_PATTERN: &str = "*_faults_Test.java";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    pub name: String,
    pub operation: OperationName,
    pub non_null_assertions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuccessSummary {
    pub tests: Vec<TestSummary>,
    /// Tests with at least one non-null assertion.
    pub flagged: usize,
}

pub fn parse_successes(source: &str) -> SuccessSummary {
    let tests: Vec<TestSummary> = split_tests(source)
        .into_iter()
        .map(|case| TestSummary {
            name: case.name.to_string(),
            operation: test_operation(case.body),
            non_null_assertions: count_non_null_assertions(case.body),
        })
        .collect();

    let flagged = tests.iter().filter(|t| t.non_null_assertions > 0).count();
    SuccessSummary { tests, flagged }
}

pub fn read_successes(path: &Path) -> Result<SuccessSummary, CaptureError> {
    let source = fs::read_to_string(path).map_err(|e| CaptureError::read_file(path, e))?;
    let summary = parse_successes(&source);

    tracing::info!(
        path = %path.display(),
        tests = summary.tests.len(),
        flagged = summary.flagged,
        "parsed EvoMaster successes suite"
    );

    Ok(summary)
}

pub fn read_fault_count(path: &Path) -> Result<usize, CaptureError> {
    let source = fs::read_to_string(path).map_err(|e| CaptureError::read_file(path, e))?;
    Ok(count_fault_tests(&source))
}
