use crate::utils::MetaData;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Log message with additional information.
pub struct LogMessage {
    /// Logged warning.
    pub message: Warning,
    /// Information of where the message originated from.
    pub meta_data: MetaData,
}

impl LogMessage {
    pub(crate) fn with_warning(message: Warning, meta_data: &MetaData) -> Self {
        LogMessage {
            message,
            meta_data: meta_data.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A detected non-fatal issue in the input lines.
pub enum Warning {
    /// The leading whitespace of the line contains a tab, which is not counted
    /// as indentation.
    TabInIndentation,
    /// The line has the same text as an earlier line.
    DuplicateText { first: MetaData },
    /// The option is not followed by a plot line and ends its branch.
    DeadEndOption,
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] WARNING: {}", self.meta_data, self.message)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Warning::*;

        match self {
            TabInIndentation => write!(
                f,
                "found a tab in the indentation: only spaces count towards the depth of a line"
            ),
            DuplicateText { first } => write!(
                f,
                "the line repeats the text of {}: branches are placed by position, \
                 not by text",
                first
            ),
            DeadEndOption => write!(f, "the option does not lead to any plot line"),
        }
    }
}
