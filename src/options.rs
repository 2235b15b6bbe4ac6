//! Configuration for building trees.

use crate::{consts::DEFAULT_OPTION_PREFIX, error::BuildError};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
/// Options used when building a `PlotTree`.
///
/// # Examples
/// ```
/// # use plotree::{read_tree_from_lines, TreeOptions};
/// let lines = ["The road forks.", "> Go left", "  A wolf!"];
/// let options = TreeOptions::with_prefix(">");
///
/// let tree = read_tree_from_lines(&lines, &options).unwrap();
/// assert_eq!(tree.root().children().len(), 1);
/// ```
pub struct TreeOptions {
    /// Prefix which marks a line as an option.
    ///
    /// A line is an option if it starts with this prefix after surrounding whitespace
    /// has been trimmed. Defaults to `"#"`.
    pub option_prefix: String,
}

impl TreeOptions {
    /// Create options which mark option lines with the given prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        TreeOptions {
            option_prefix: prefix.to_string(),
        }
    }

    /// Assert that the options can be used to build a tree.
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if self.option_prefix.is_empty() {
            Err(BuildError::EmptyOptionPrefix)
        } else {
            Ok(())
        }
    }
}

impl Default for TreeOptions {
    fn default() -> Self {
        TreeOptions::with_prefix(DEFAULT_OPTION_PREFIX)
    }
}
