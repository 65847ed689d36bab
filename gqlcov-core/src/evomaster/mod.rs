//! EvoMaster Suites
//!
//! EvoMaster writes its black-box results as JUnit suites rather than traffic
//! captures: `<prefix>_successes_Test.java` holds tests whose responses were
//! accepted and `<prefix>_faults_Test.java` holds tests that exposed faults.
//! A success test counts as covering its operation when it asserts at least
//! one non-null response field.

mod parse;
mod suite;

pub use parse::*;
pub use suite::*;
