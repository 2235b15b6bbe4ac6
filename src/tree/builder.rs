//! Growing branches from lines and splicing them into the tree under construction.

use crate::{
    error::{IndentationError, IndentationErrorKind},
    line::{LineKind, ParsedLine},
    log::{Logger, Warning},
    tree::{
        node::{Node, NodeIndex},
        plot_tree::PlotTree,
    },
    utils::MetaData,
};

use std::collections::HashMap;

/// Tree under construction.
///
/// Nodes are added in the order of their lines, so the node for line `i` always sits at
/// index `i`. Which line was consumed last is returned from every operation that consumes
/// lines rather than kept here.
pub(crate) struct TreeBuilder<'a> {
    lines: &'a [ParsedLine],
    nodes: Vec<Node>,
    /// First occurrence of every line text seen so far.
    seen: HashMap<&'a str, MetaData>,
    log: Logger,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(lines: &'a [ParsedLine]) -> Self {
        TreeBuilder {
            lines,
            nodes: Vec::with_capacity(lines.len()),
            seen: HashMap::new(),
            log: Logger::default(),
        }
    }

    /// Grow a branch starting from the line at `start`.
    ///
    /// The branch continues for as long as every following line is indented deeper than
    /// the line before it. Each line in the branch is nested under the previous one.
    ///
    /// Returns the index of the last line which was consumed by the branch.
    pub fn grow(&mut self, start: NodeIndex) -> Result<NodeIndex, IndentationError> {
        self.add_node(start);

        let mut current = start;

        loop {
            let following = current + 1;

            match self.lines.get(following) {
                Some(line) if line.depth > self.lines[current].depth => {
                    self.add_node(following);
                    self.link(current, following)?;

                    current = following;
                }
                _ => break,
            }
        }

        if self.lines[current].is_option() {
            self.log
                .add_warning(Warning::DeadEndOption, &self.lines[current].meta_data);
        }

        Ok(current)
    }

    /// Grow a branch from the line at `new` and add it as another option of the plot node
    /// built from the line at `parent`.
    ///
    /// Returns the index of the last line which was consumed by the new branch.
    pub fn attach(
        &mut self,
        parent: NodeIndex,
        new: NodeIndex,
    ) -> Result<NodeIndex, IndentationError> {
        let line = &self.lines[new];
        let parent_meta_data = self.lines[parent].meta_data.clone();

        match (self.nodes.get(parent).map(Node::kind), line.kind) {
            (None, _) => {
                let kind = IndentationErrorKind::UnattachedParent {
                    parent: parent_meta_data,
                };

                Err(IndentationError::from_line(kind, line))
            }
            (Some(LineKind::Option), _) => {
                let kind = IndentationErrorKind::OptionAsParent {
                    parent: parent_meta_data,
                };

                Err(IndentationError::from_line(kind, line))
            }
            (Some(LineKind::Plot), LineKind::Plot) => {
                let kind = IndentationErrorKind::PlotAsChild {
                    parent: parent_meta_data,
                };

                Err(IndentationError::from_line(kind, line))
            }
            (Some(LineKind::Plot), LineKind::Option) => {
                let last = self.grow(new)?;

                if let Node::Plot(plot) = &mut self.nodes[parent] {
                    plot.children.push(new);
                }

                Ok(last)
            }
        }
    }

    /// Finish the construction and return the tree.
    pub fn finish(self, prefix: &str) -> PlotTree {
        PlotTree::from_nodes(self.nodes, prefix, self.log)
    }

    /// Create the node for the line at `index`.
    fn add_node(&mut self, index: NodeIndex) {
        debug_assert_eq!(
            self.nodes.len(),
            index,
            "lines must be consumed in order when building a tree"
        );

        let line: &'a ParsedLine = &self.lines[index];

        if line.has_tab_in_indentation() {
            self.log
                .add_warning(Warning::TabInIndentation, &line.meta_data);
        }

        if let Some(first) = self.seen.get(line.text.as_str()) {
            let warning = Warning::DuplicateText {
                first: first.clone(),
            };

            self.log.add_warning(warning, &line.meta_data);
        } else {
            self.seen.insert(&line.text, line.meta_data.clone());
        }

        self.nodes
            .push(Node::with_kind(line.kind, &line.text, &line.meta_data));
    }

    /// Nest the node at `child` directly under the node at `parent`.
    fn link(&mut self, parent: NodeIndex, child: NodeIndex) -> Result<(), IndentationError> {
        let line = &self.lines[child];
        let parent_meta_data = self.lines[parent].meta_data.clone();

        match (&mut self.nodes[parent], line.kind) {
            (Node::Plot(plot), LineKind::Option) => {
                plot.children.push(child);
                Ok(())
            }
            (Node::Option(option), LineKind::Plot) => {
                option.next = Some(child);
                Ok(())
            }
            (Node::Plot(..), LineKind::Plot) => {
                let kind = IndentationErrorKind::PlotAsChild {
                    parent: parent_meta_data,
                };

                Err(IndentationError::from_line(kind, line))
            }
            (Node::Option(..), LineKind::Option) => {
                let kind = IndentationErrorKind::OptionAsParent {
                    parent: parent_meta_data,
                };

                Err(IndentationError::from_line(kind, line))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::line::parse_lines;

    fn get_lines(lines: &[&str]) -> Vec<ParsedLine> {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (*line, MetaData::from(i)))
            .collect();

        parse_lines(lines, "#")
    }

    #[test]
    fn growing_from_last_line_yields_a_leaf() {
        let lines = get_lines(&["OnlyLine"]);
        let mut builder = TreeBuilder::new(&lines);

        assert_eq!(builder.grow(0).unwrap(), 0);

        let tree = builder.finish("#");
        assert!(tree.root().is_end());
    }

    #[test]
    fn growing_stops_when_next_line_is_not_deeper() {
        let lines = get_lines(&["Start", "#Go left", "  Left path"]);
        let mut builder = TreeBuilder::new(&lines);

        assert_eq!(builder.grow(0).unwrap(), 0);
        assert_eq!(builder.nodes.len(), 1);
        assert!(builder.nodes[0].children().is_empty());
    }

    #[test]
    fn growing_nests_every_deeper_line_under_the_previous() {
        let lines = get_lines(&["Start", "  #Open door", "    Dark room", "      #Light torch"]);
        let mut builder = TreeBuilder::new(&lines);

        assert_eq!(builder.grow(0).unwrap(), 3);

        let tree = builder.finish("#");

        assert_eq!(tree.root().children(), &[1]);
        assert_eq!(tree.option(1).unwrap().next(), Some(2));
        assert_eq!(tree.plot(2).unwrap().children(), &[3]);
        assert!(tree.option(3).unwrap().is_dead_end());
    }

    #[test]
    fn growing_compares_depth_with_previous_line_rather_than_start() {
        let lines = get_lines(&["Start", "    #Deep", "      Deeper", "  #Shallow"]);
        let mut builder = TreeBuilder::new(&lines);

        // "  #Shallow" is deeper than "Start" but not deeper than "      Deeper"
        assert_eq!(builder.grow(0).unwrap(), 2);
    }

    #[test]
    fn growing_an_option_under_an_option_yields_error() {
        let lines = get_lines(&["Start", "  #Open door", "    #Knock first"]);
        let mut builder = TreeBuilder::new(&lines);

        let error = builder.grow(0).unwrap_err();

        assert_eq!(error.meta_data, MetaData::from(2));
        assert_eq!(
            error.kind,
            IndentationErrorKind::OptionAsParent {
                parent: MetaData::from(1)
            }
        );
    }

    #[test]
    fn growing_a_plot_under_a_plot_yields_error() {
        let lines = get_lines(&["Start", "  More plot"]);
        let mut builder = TreeBuilder::new(&lines);

        let error = builder.grow(0).unwrap_err();

        assert_eq!(
            error.kind,
            IndentationErrorKind::PlotAsChild {
                parent: MetaData::from(0)
            }
        );
    }

    #[test]
    fn attaching_adds_new_branch_as_last_option() {
        let lines = get_lines(&[
            "Start",
            "  #Go left",
            "    Left path",
            "  #Go right",
            "    Right path",
        ]);
        let mut builder = TreeBuilder::new(&lines);

        assert_eq!(builder.grow(0).unwrap(), 2);
        assert_eq!(builder.attach(0, 3).unwrap(), 4);

        let tree = builder.finish("#");

        assert_eq!(tree.root().children(), &[1, 3]);
        assert_eq!(tree.option(3).unwrap().next(), Some(4));
    }

    #[test]
    fn attaching_to_an_option_yields_error() {
        let lines = get_lines(&["Start", "  #Go left", "    Left path", "   #Sneak"]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();
        let error = builder.attach(1, 3).unwrap_err();

        assert_eq!(error.meta_data, MetaData::from(3));
        assert_eq!(
            error.kind,
            IndentationErrorKind::OptionAsParent {
                parent: MetaData::from(1)
            }
        );
    }

    #[test]
    fn attaching_a_plot_line_to_a_plot_yields_error() {
        let lines = get_lines(&["Start", "  #Go left", "    Left path", "  Lost plot"]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();

        match builder.attach(0, 3).unwrap_err().kind {
            IndentationErrorKind::PlotAsChild { .. } => (),
            other => panic!("expected `PlotAsChild` but got {:?}", other),
        }
    }

    #[test]
    fn attaching_to_a_line_which_has_not_been_consumed_yields_error() {
        let lines = get_lines(&["Start", "#Go left", "  Left path"]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();

        match builder.attach(2, 1).unwrap_err().kind {
            IndentationErrorKind::UnattachedParent { parent } => {
                assert_eq!(parent, MetaData::from(2))
            }
            other => panic!("expected `UnattachedParent` but got {:?}", other),
        }
    }

    #[test]
    fn dead_end_options_are_logged() {
        let lines = get_lines(&["Start", "  #Go nowhere"]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();

        let tree = builder.finish("#");
        let warnings = tree.log().iter().collect::<Vec<_>>();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, Warning::DeadEndOption);
        assert_eq!(warnings[0].meta_data, MetaData::from(1));
    }

    #[test]
    fn duplicate_texts_are_logged_with_first_occurrence() {
        let lines = get_lines(&[
            "Start",
            "  #Wait",
            "    Nothing happens.",
            "  #Wait",
            "    Still nothing.",
        ]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();
        builder.attach(0, 3).unwrap();

        let tree = builder.finish("#");

        let duplicate = tree
            .log()
            .iter()
            .find(|message| message.meta_data == MetaData::from(3))
            .unwrap();

        assert_eq!(
            duplicate.message,
            Warning::DuplicateText {
                first: MetaData::from(1)
            }
        );
    }

    #[test]
    fn tabs_in_indentation_are_logged() {
        let lines = get_lines(&["Start", "\t#Tabbed"]);
        let mut builder = TreeBuilder::new(&lines);

        builder.grow(0).unwrap();

        let tree = builder.finish("#");

        assert!(tree
            .log()
            .iter()
            .any(|message| message.message == Warning::TabInIndentation));
    }
}
