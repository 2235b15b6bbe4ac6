//! Build branching story trees from indentation-structured text.
//!
//! A story is written as plain lines of text. Lines which start with an option prefix
//! (`#` by default) are choices for the reader, all other lines are plot. Indentation
//! decides what leads where: a line indented deeper than the line before it continues
//! from that line, and a line which falls back in indentation starts a new option under
//! the nearest line it is nested in, which must be a plot line. Options at the top of the
//! story may also be written flush with the first plot line.
//!
//! ```plain
//! The road forks.
//! #Go left
//!   A wolf blocks the path.
//!     #Fight
//!       You win.
//!     #Flee
//! #Go right
//!   The road ends at a river.
//! ```
//!
//! The lines are read into a [`PlotTree`] of alternating [`PlotNode`]s and [`OptionNode`]s.
//! The raw text of every line is kept in the tree, while [`PlotTree::clean`] creates a copy
//! with the prefix and indentation stripped, ready to present to a reader.
//!
//! # Examples
//! ```
//! use plotree::read_tree_from_string;
//!
//! let content = "\
//! The road forks.
//! #Go left
//!   A wolf blocks the path.
//!     #Fight
//!       You win.
//!     #Flee
//! #Go right
//!   The road ends at a river.
//! ";
//!
//! let tree = read_tree_from_string(content).unwrap().clean();
//! let root = tree.root();
//!
//! println!("{}", root.text());
//!
//! for (i, option) in tree.options(root).enumerate() {
//!     println!("{}. {}", i + 1, option.text());
//! }
//! ```
//!
//! # Errors
//! Indentation which cannot be arranged into a tree yields a
//! [`BuildError::MalformedIndentation`][crate::error::BuildError] error pointing at the
//! offending line. Non-fatal issues, like options that lead nowhere, are collected in the
//! [log][crate::log::Logger] of the built tree.
//!
//! # Serialization
//! With the `serde_support` feature enabled, trees, options and log messages implement
//! `Deserialize` and `Serialize`.

mod consts;
pub mod error;
mod line;
pub mod log;
mod options;
mod tree;
mod utils;

pub use error::BuildError;
pub use line::{depth, is_option, strip_prefix, LineKind};
pub use options::TreeOptions;
pub use tree::{
    read_tree_from_lines, read_tree_from_string, read_tree_from_string_with_options,
    DepthFirst, Node, NodeIndex, OptionNode, PlotNode, PlotTree,
};
pub use utils::MetaData;
