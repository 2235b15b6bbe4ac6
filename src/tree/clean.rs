//! Presentation copies of trees.

use crate::{line::strip_prefix, tree::plot_tree::PlotTree};

impl PlotTree {
    /// Create a copy of the tree with text ready for presentation.
    ///
    /// The prefix is stripped from the text of every node, plot and option alike, after which
    /// the text is trimmed of surrounding whitespace. The copy keeps the structure, meta data
    /// and log of the original and is fully independent of it.
    ///
    /// # Examples
    /// ```
    /// # use plotree::read_tree_from_string;
    /// let content = "\
    /// The road forks.
    /// #Go left
    ///   A wolf blocks the path.
    /// ";
    ///
    /// let tree = read_tree_from_string(content).unwrap();
    /// let cleaned = tree.clean();
    ///
    /// let option = cleaned.option(1).unwrap();
    /// assert_eq!(option.text(), "Go left");
    /// assert_eq!(cleaned.next(option).unwrap().text(), "A wolf blocks the path.");
    ///
    /// assert_eq!(tree.option(1).unwrap().text(), "#Go left");
    /// ```
    pub fn clean(&self) -> PlotTree {
        let nodes = self
            .nodes()
            .iter()
            .map(|node| node.with_text(strip_prefix(node.text(), self.prefix())))
            .collect();

        PlotTree::from_nodes(nodes, self.prefix(), self.log().clone())
    }
}
