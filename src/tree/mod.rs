//! Story trees and how they are built from lines.

mod build;
mod builder;
mod clean;
mod locate;
mod node;
mod plot_tree;

pub use build::{read_tree_from_lines, read_tree_from_string, read_tree_from_string_with_options};
pub use node::{Node, NodeIndex, OptionNode, PlotNode};
pub use plot_tree::{DepthFirst, PlotTree};
