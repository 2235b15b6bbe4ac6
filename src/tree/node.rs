//! Plot and option nodes of a story tree.

use crate::{line::LineKind, utils::MetaData};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Index of a node in a `PlotTree`.
///
/// Every input line becomes exactly one node, so this is also the position of the line
/// in the sequence the tree was built from.
pub type NodeIndex = usize;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Node in a story tree.
///
/// Plot and option nodes alternate: the children of a plot node are all option nodes,
/// and an option node leads to at most one plot node.
pub enum Node {
    /// Narrative beat which branches into options.
    Plot(PlotNode),
    /// Choice which leads to the next narrative beat.
    Option(OptionNode),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Narrative beat in a story.
pub struct PlotNode {
    /// Text of the line.
    pub(crate) text: String,
    /// Options branching from this beat, in the order they were read.
    pub(crate) children: Vec<NodeIndex>,
    /// Origin of the line in the input text.
    pub(crate) meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Choice in a story.
pub struct OptionNode {
    /// Text of the line.
    pub(crate) text: String,
    /// Plot node that the option leads to, if any.
    pub(crate) next: Option<NodeIndex>,
    /// Origin of the line in the input text.
    pub(crate) meta_data: MetaData,
}

impl Node {
    pub(crate) fn with_kind(kind: LineKind, text: &str, meta_data: &MetaData) -> Self {
        match kind {
            LineKind::Plot => Node::Plot(PlotNode {
                text: text.to_string(),
                children: Vec::new(),
                meta_data: meta_data.clone(),
            }),
            LineKind::Option => Node::Option(OptionNode {
                text: text.to_string(),
                next: None,
                meta_data: meta_data.clone(),
            }),
        }
    }

    /// Text of the node.
    pub fn text(&self) -> &str {
        match self {
            Node::Plot(plot) => &plot.text,
            Node::Option(option) => &option.text,
        }
    }

    /// Origin of the node in the input text.
    pub fn meta_data(&self) -> &MetaData {
        match self {
            Node::Plot(plot) => &plot.meta_data,
            Node::Option(option) => &option.meta_data,
        }
    }

    /// Kind of line that the node was made from.
    pub fn kind(&self) -> LineKind {
        match self {
            Node::Plot(..) => LineKind::Plot,
            Node::Option(..) => LineKind::Option,
        }
    }

    /// Indices of the nodes directly below this one.
    pub fn children(&self) -> &[NodeIndex] {
        match self {
            Node::Plot(plot) => &plot.children,
            Node::Option(option) => match &option.next {
                Some(next) => std::slice::from_ref(next),
                None => &[],
            },
        }
    }

    /// If the node is a plot node, return it.
    pub fn as_plot(&self) -> Option<&PlotNode> {
        match self {
            Node::Plot(plot) => Some(plot),
            Node::Option(..) => None,
        }
    }

    /// If the node is an option node, return it.
    pub fn as_option(&self) -> Option<&OptionNode> {
        match self {
            Node::Option(option) => Some(option),
            Node::Plot(..) => None,
        }
    }

    /// Copy the node with its text replaced.
    pub(crate) fn with_text(&self, text: String) -> Self {
        match self {
            Node::Plot(plot) => Node::Plot(PlotNode {
                text,
                children: plot.children.clone(),
                meta_data: plot.meta_data.clone(),
            }),
            Node::Option(option) => Node::Option(OptionNode {
                text,
                next: option.next,
                meta_data: option.meta_data.clone(),
            }),
        }
    }
}

impl PlotNode {
    /// Text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Indices of the options which branch from this node.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Return `true` if no options branch from this node, ending the story branch.
    pub fn is_end(&self) -> bool {
        self.children.is_empty()
    }

    /// Origin of the line in the input text.
    pub fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }
}

impl OptionNode {
    /// Text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the plot node the option leads to.
    pub fn next(&self) -> Option<NodeIndex> {
        self.next
    }

    /// Return `true` if the option does not lead to a plot node.
    pub fn is_dead_end(&self) -> bool {
        self.next.is_none()
    }

    /// Origin of the line in the input text.
    pub fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }
}
