mod capture;
pub mod tracing;

pub use capture::{CaptureBuilder, MessageLogBuilder, Workspace};
pub use tracing::{CapturedEvent, capture_events};
