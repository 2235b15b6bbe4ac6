//! Main error type from building trees.

use crate::error::{indentation::IndentationError, utils::write_line_information};

use std::{
    error::Error,
    fmt::{self, Write},
};

#[derive(Clone, Debug, PartialEq)]
/// Errors from building a tree.
///
/// A full print out of the error along with the offending line can be made through
/// [`print_build_error`][crate::error::print_build_error].
pub enum BuildError {
    /// Attempted to build a tree without any lines.
    Empty,
    /// The prefix which marks option lines was empty, which would make every line an option.
    EmptyOptionPrefix,
    /// The lines could not be arranged into a tree because of their indentation.
    MalformedIndentation(IndentationError),
}

/// Get a string describing the error encountered while building a tree.
///
/// Indentation errors are printed with the line number and the text of the offending line.
///
/// # Examples
/// ```
/// # use plotree::{read_tree_from_string, error::print_build_error};
/// let content = "\
/// #Go left
/// A wolf!
/// ";
///
/// let error = read_tree_from_string(content).unwrap_err();
/// let report = print_build_error(&error).unwrap();
///
/// assert!(report.starts_with("(line 1) "));
/// assert!(report.contains("#Go left"));
/// ```
pub fn print_build_error(error: &BuildError) -> Result<String, fmt::Error> {
    let mut buffer = String::new();

    match error {
        BuildError::MalformedIndentation(err) => {
            write_line_information(&mut buffer, &err.meta_data)?;
            writeln!(&mut buffer, "{}", err)?;
            write!(&mut buffer, "    | {}", err.text)?;
        }
        _ => write!(&mut buffer, "{}", error)?,
    }

    Ok(buffer)
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            BuildError::MalformedIndentation(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BuildError::*;

        match self {
            Empty => write!(f, "Could not build tree: no lines were given"),
            EmptyOptionPrefix => write!(
                f,
                "Could not build tree: the option prefix is empty, which marks every line \
                 as an option"
            ),
            MalformedIndentation(err) => write!(f, "{}", err),
        }
    }
}

impl_from_error![
    BuildError;
    [MalformedIndentation, IndentationError]
];
