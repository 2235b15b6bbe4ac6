//! Classification of individual input lines.

mod classify;

pub(crate) use classify::{parse_lines, ParsedLine};
pub use classify::{depth, is_option, strip_prefix, LineKind};
