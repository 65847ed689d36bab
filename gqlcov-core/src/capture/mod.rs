//! Capture Decoding
//!
//! Turns a raw capture produced by a proxy or fuzzer into an ordered list of
//! [`CaptureEntry`] values, one per observed request/response exchange.
//!
//! Two capture shapes are understood:
//! - **Rows**: a CSV export where every row carries a timestamp, a status code
//!   and base64-encoded request and response messages.
//! - **Blocks**: a plain text dump where exchanges are separated by
//!   `==== <n> ==========` lines and the request and response are the first two
//!   JSON objects found in each section.
//!
//! Decoding is lossy by contract. A payload that cannot be decoded becomes an
//! empty string and later stages treat it as non-extractable. Only I/O failures
//! on the capture file itself are reported as errors.

mod blocks;
mod error;
mod payload;
mod rows;
mod types;

pub use blocks::*;
pub use error::*;
pub use payload::*;
pub use rows::*;
pub use types::*;
