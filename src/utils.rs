//! Utilities and derives used elsewhere in the library.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Information about the origin of an item.
///
/// To be used to present errors and warnings from building a tree, allowing access to where
/// they originated from.
pub struct MetaData {
    /// Which line in the original text the item originated from.
    pub line_index: u32,
}

impl MetaData {
    /// Return the 1-based line number, as a text editor would show it.
    pub fn line(&self) -> u32 {
        self.line_index + 1
    }
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}", self.line())
    }
}

impl From<usize> for MetaData {
    fn from(line_index: usize) -> Self {
        MetaData {
            line_index: line_index as u32,
        }
    }
}
