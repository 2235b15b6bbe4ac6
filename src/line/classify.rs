//! Classify raw lines as plot or option lines and measure their indentation.

use crate::{
    consts::{INDENT_CHAR, TAB_CHAR},
    utils::MetaData,
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Kind of content on a line.
pub enum LineKind {
    /// Narrative text.
    Plot,
    /// Choice which leads to more narrative text.
    Option,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineKind::Plot => write!(f, "plot"),
            LineKind::Option => write!(f, "option"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Line of input which has been classified and measured.
///
/// Every line is classified once, before any branches are grown, so that the tree
/// building only ever compares depths and kinds.
pub(crate) struct ParsedLine {
    /// Raw text of the line, including indentation and prefix.
    pub text: String,
    /// Number of leading spaces.
    pub depth: u32,
    /// Whether the line is plot or option.
    pub kind: LineKind,
    /// Origin of the line in the input text.
    pub meta_data: MetaData,
}

impl ParsedLine {
    pub fn from_text(text: &str, prefix: &str, meta_data: MetaData) -> Self {
        let kind = if is_option(text, prefix) {
            LineKind::Option
        } else {
            LineKind::Plot
        };

        ParsedLine {
            text: text.to_string(),
            depth: depth(text),
            kind,
            meta_data,
        }
    }

    pub fn is_option(&self) -> bool {
        self.kind == LineKind::Option
    }

    /// Return `true` if the whitespace before the content contains a tab.
    pub fn has_tab_in_indentation(&self) -> bool {
        self.text
            .chars()
            .take_while(|c| c.is_whitespace())
            .any(|c| c == TAB_CHAR)
    }
}

/// Classify a set of lines along with their meta data.
pub(crate) fn parse_lines(lines: Vec<(&str, MetaData)>, prefix: &str) -> Vec<ParsedLine> {
    lines
        .into_iter()
        .map(|(text, meta_data)| ParsedLine::from_text(text, prefix, meta_data))
        .collect()
}

/// Count the number of leading spaces in a line.
///
/// Only spaces are counted. Any other character, tabs included, ends the indentation.
///
/// # Examples
/// ```
/// # use plotree::depth;
/// assert_eq!(depth("    #Open the door"), 4);
/// assert_eq!(depth("\t#Open the door"), 0);
/// ```
pub fn depth(line: &str) -> u32 {
    line.chars().take_while(|&c| c == INDENT_CHAR).count() as u32
}

/// Return `true` if the line, trimmed of surrounding whitespace, starts with the prefix.
///
/// # Examples
/// ```
/// # use plotree::is_option;
/// assert!(is_option("  #Open the door", "#"));
/// assert!(!is_option("The door creaks open.", "#"));
/// ```
pub fn is_option(line: &str, prefix: &str) -> bool {
    line.trim().starts_with(prefix)
}

/// Remove the first occurrence of the prefix from the line and trim whitespace from both ends.
///
/// Lines without the prefix are only trimmed.
///
/// # Examples
/// ```
/// # use plotree::strip_prefix;
/// assert_eq!(&strip_prefix("  #Open the door ", "#"), "Open the door");
/// assert_eq!(&strip_prefix("  The door creaks open.", "#"), "The door creaks open.");
/// ```
pub fn strip_prefix(line: &str, prefix: &str) -> String {
    line.replacen(prefix, "", 1).trim().to_string()
}
