//! Finished story tree and read-only access to it.

use crate::{
    consts::ROOT_NODE_INDEX,
    log::Logger,
    tree::node::{Node, NodeIndex, OptionNode, PlotNode},
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Story tree of alternating plot and option nodes.
///
/// Nodes are stored in the order of the lines they were built from and refer to each
/// other through their `NodeIndex`. The root plot node is always the first node.
///
/// # Examples
/// ```
/// # use plotree::read_tree_from_string;
/// let content = "\
/// The road forks.
/// #Go left
///   A wolf blocks the path.
/// #Go right
///   The road ends at a river.
/// ";
///
/// let tree = read_tree_from_string(content).unwrap();
/// let root = tree.root();
///
/// for option in tree.options(root) {
///     let outcome = tree.next(option).unwrap();
///     println!("{} => {}", option.text(), outcome.text());
/// }
/// ```
pub struct PlotTree {
    /// All nodes of the tree, one per input line.
    nodes: Vec<Node>,
    /// Prefix which marked option lines when the tree was built.
    prefix: String,
    /// Non-fatal issues found while building.
    log: Logger,
}

impl PlotTree {
    pub(crate) fn from_nodes(nodes: Vec<Node>, prefix: &str, log: Logger) -> Self {
        PlotTree {
            nodes,
            prefix: prefix.to_string(),
            log,
        }
    }

    /// Root plot node, which the story starts from.
    pub fn root(&self) -> &PlotNode {
        self.plot(ROOT_NODE_INDEX).expect(
            "a `PlotTree` is only created from input that starts with a plot line, \
             so the first node is always a plot node",
        )
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` if the tree has no nodes.
    ///
    /// A built tree always has at least its root node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in the order of the lines they were built from.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the node with given index.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Get the node with given index if it is a plot node.
    pub fn plot(&self, index: NodeIndex) -> Option<&PlotNode> {
        self.get(index).and_then(Node::as_plot)
    }

    /// Get the node with given index if it is an option node.
    pub fn option(&self, index: NodeIndex) -> Option<&OptionNode> {
        self.get(index).and_then(Node::as_option)
    }

    /// Iterate over the options of a plot node in the order they were read.
    pub fn options<'a>(&'a self, plot: &'a PlotNode) -> impl Iterator<Item = &'a OptionNode> + 'a {
        plot.children.iter().filter_map(move |&i| self.option(i))
    }

    /// Get the plot node that an option leads to.
    pub fn next(&self, option: &OptionNode) -> Option<&PlotNode> {
        option.next.and_then(|i| self.plot(i))
    }

    /// Iterate over the nodes depth-first, starting from the root.
    ///
    /// Options are visited in the order they were read and every option is followed by
    /// the branch it leads to before its next sibling. For well-formed input this visits
    /// the nodes in the order of their input lines.
    pub fn iter(&self) -> DepthFirst {
        let stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![ROOT_NODE_INDEX]
        };

        DepthFirst { tree: self, stack }
    }

    /// Find the node which was built from the given line of the input text.
    ///
    /// Line indices are zero-based and refer to the original text, including any blank
    /// lines which were skipped when reading it.
    pub fn find_line(&self, line_index: u32) -> Option<(NodeIndex, &Node)> {
        self.iter()
            .find(|(_, node)| node.meta_data().line_index == line_index)
    }

    /// Prefix which marked option lines when the tree was built.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Warnings found while building the tree.
    pub fn log(&self) -> &Logger {
        &self.log
    }
}

/// Depth-first iterator over the nodes of a `PlotTree`.
///
/// Yields the index of every node along with the node.
pub struct DepthFirst<'a> {
    tree: &'a PlotTree,
    stack: Vec<NodeIndex>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = self.tree.get(index)?;

        // Reversed so that the first child is popped first
        self.stack.extend(node.children().iter().rev());

        Some((index, node))
    }
}
