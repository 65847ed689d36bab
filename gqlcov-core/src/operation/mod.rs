//! Operation Extraction
//!
//! Recovers the GraphQL field a captured request invokes, e.g. `createWallet`
//! for `mutation { createWallet(input: {}) { id } }`.
//!
//! Requests are JSON bodies with a `query` string. The query text is read with
//! a small scanner rather than full GraphQL parsing because fuzzers routinely
//! send truncated or malformed documents. Anything the scanner cannot make
//! sense of becomes [`OperationName::unknown`].

mod extract;
mod name;
mod scanner;
#[cfg(test)]
mod tests;

pub use extract::*;
pub use name::*;
pub use scanner::*;
