//! Utilities for inspecting warnings and other non-fatal issues.

mod logger;
mod message;

pub use logger::{Logger, LoggerIter};
pub use message::{LogMessage, Warning};
