//! Errors from inconsistent indentation in the input lines.

use crate::{line::ParsedLine, utils::MetaData};

use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq)]
/// The lines could not be arranged into a tree of plot and option nodes.
///
/// Building stops at the first such error. No partial tree is returned.
pub struct IndentationError {
    /// Kind of inconsistency.
    pub kind: IndentationErrorKind,
    /// Raw text of the offending line.
    pub text: String,
    /// Information about the offending line.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of indentation errors.
pub enum IndentationErrorKind {
    /// The first line is an option, but a story must start with a plot line.
    StartsWithOption,
    /// The line is indented less than every line before it, so there is no plot line
    /// it can branch from.
    NoEnclosingLine,
    /// The line is nested under an option line. Options lead to exactly one plot line
    /// and cannot branch any further.
    OptionAsParent { parent: MetaData },
    /// The line is a plot line nested directly under another plot line. Plot lines can
    /// only be reached through options.
    PlotAsChild { parent: MetaData },
    /// The line that the branch should attach to is not part of the tree built so far.
    UnattachedParent { parent: MetaData },
}

impl IndentationError {
    pub(crate) fn from_line(kind: IndentationErrorKind, line: &ParsedLine) -> Self {
        IndentationError {
            kind,
            text: line.text.clone(),
            meta_data: line.meta_data.clone(),
        }
    }

    /// Get the line that the offending line was found to be nested under, if any.
    pub fn parent(&self) -> Option<&MetaData> {
        use IndentationErrorKind::*;

        match &self.kind {
            OptionAsParent { parent } | PlotAsChild { parent } | UnattachedParent { parent } => {
                Some(parent)
            }
            StartsWithOption | NoEnclosingLine => None,
        }
    }
}

impl Error for IndentationError {}

impl fmt::Display for IndentationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use IndentationErrorKind::*;

        write!(f, "Inconsistent indentation for {}: ", self.meta_data)?;

        match &self.kind {
            StartsWithOption => write!(f, "a story cannot start with an option"),
            NoEnclosingLine => write!(f, "the line is indented less than every line before it"),
            OptionAsParent { parent } => write!(
                f,
                "the line is nested under the option on {}, but options cannot branch",
                parent
            ),
            PlotAsChild { parent } => write!(
                f,
                "the plot line is nested directly under the plot on {}, but plot lines \
                 must follow an option",
                parent
            ),
            UnattachedParent { parent } => write!(
                f,
                "the line branches from {} which is not part of the tree",
                parent
            ),
        }
    }
}
