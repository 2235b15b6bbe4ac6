//! Errors from building trees.

#[macro_use]
mod utils;
mod error;
mod indentation;

pub use error::{print_build_error, BuildError};
pub use indentation::{IndentationError, IndentationErrorKind};
