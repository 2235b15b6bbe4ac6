//! Build story trees from lines of text.
//!
//! The first line becomes the root, from which a branch is grown for as long as the lines
//! keep getting deeper. Every line after that which did not continue a branch starts a new
//! one, which is attached as another option of the plot line it is nested under. Branches
//! are grown and attached one after another until all lines have been consumed.

use crate::{
    consts::ROOT_NODE_INDEX,
    error::{BuildError, IndentationError, IndentationErrorKind},
    line::{parse_lines, ParsedLine},
    options::TreeOptions,
    tree::{builder::TreeBuilder, locate::Locator, plot_tree::PlotTree},
    utils::MetaData,
};

/// Build a tree from a text with default options.
///
/// The text is split into lines. Blank lines are skipped but still counted, so that line
/// numbers in errors and warnings refer to the original text.
///
/// # Examples
/// ```
/// # use plotree::read_tree_from_string;
/// let content = "\
/// You wake up in a cell.
///
/// #Call for the guard
///   Nobody answers.
/// #Search the cell
///   You find a loose brick.
/// ";
///
/// let tree = read_tree_from_string(content).unwrap();
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.root().children().len(), 2);
/// ```
pub fn read_tree_from_string(content: &str) -> Result<PlotTree, BuildError> {
    read_tree_from_string_with_options(content, &TreeOptions::default())
}

/// Build a tree from a text with given options.
///
/// See [`read_tree_from_string`] for how the text is split.
pub fn read_tree_from_string_with_options(
    content: &str,
    options: &TreeOptions,
) -> Result<PlotTree, BuildError> {
    let lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (line, MetaData::from(i)))
        .collect::<Vec<_>>();

    build_tree_from_lines(lines, options)
}

/// Build a tree from a set of lines.
///
/// Every line becomes a node in the tree, blank lines included.
///
/// # Examples
/// ```
/// # use plotree::{read_tree_from_lines, TreeOptions};
/// let lines = vec!["Start", "  #Deep", "    DeepPlot", "#Shallow"];
///
/// let tree = read_tree_from_lines(&lines, &TreeOptions::default()).unwrap();
///
/// assert_eq!(tree.root().children(), &[1, 3]);
/// ```
pub fn read_tree_from_lines<S: AsRef<str>>(
    lines: &[S],
    options: &TreeOptions,
) -> Result<PlotTree, BuildError> {
    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (line.as_ref(), MetaData::from(i)))
        .collect::<Vec<_>>();

    build_tree_from_lines(lines, options)
}

impl PlotTree {
    /// Build a tree from a set of lines.
    ///
    /// Identical to [`read_tree_from_lines`].
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        options: &TreeOptions,
    ) -> Result<PlotTree, BuildError> {
        read_tree_from_lines(lines, options)
    }
}

/// Classify lines and build the tree from them.
fn build_tree_from_lines(
    lines: Vec<(&str, MetaData)>,
    options: &TreeOptions,
) -> Result<PlotTree, BuildError> {
    options.validate()?;

    let parsed_lines = parse_lines(lines, &options.option_prefix);

    build_tree(&parsed_lines, &options.option_prefix)
}

/// Build a tree from classified lines.
///
/// Fails at the first inconsistency in indentation, without returning a partial tree.
fn build_tree(lines: &[ParsedLine], prefix: &str) -> Result<PlotTree, BuildError> {
    let root = lines.first().ok_or(BuildError::Empty)?;

    if root.is_option() {
        let error = IndentationError::from_line(IndentationErrorKind::StartsWithOption, root);
        return Err(error.into());
    }

    let mut builder = TreeBuilder::new(lines);
    let mut locator = Locator::new(lines);

    let mut last = builder.grow(ROOT_NODE_INDEX)?;

    while let Some(line) = lines.get(last + 1) {
        let index = last + 1;

        let parent = locator.locate(index).ok_or_else(|| {
            IndentationError::from_line(IndentationErrorKind::NoEnclosingLine, line)
        })?;

        last = builder.attach(parent, index)?;
    }

    Ok(builder.finish(prefix))
}
