//! Find which earlier line a new branch branches from.

use crate::{line::ParsedLine, tree::node::NodeIndex};

/// Finds the lines that new branches branch from.
///
/// A branch branches from the nearest earlier line which is indented less. If no earlier
/// line is indented less, an option line may still be written flush with a plot line at
/// the top of the story, in which case it branches from the nearest such plot line.
///
/// Lines must be located in increasing order. Earlier lines which can no longer enclose
/// anything are dropped along the way, so locating every line in a story is linear.
pub(crate) struct Locator<'a> {
    lines: &'a [ParsedLine],
    /// Earlier lines which may still enclose a later line, with strictly increasing depths.
    open: Vec<NodeIndex>,
    /// Depth of the shallowest line so far and the nearest plot line at that depth.
    shallowest: Option<(u32, Option<NodeIndex>)>,
    /// Number of lines which have been added to `open`.
    num_seen: usize,
}

impl<'a> Locator<'a> {
    pub fn new(lines: &'a [ParsedLine]) -> Self {
        Locator {
            lines,
            open: Vec::new(),
            shallowest: None,
            num_seen: 0,
        }
    }

    /// Find the line that the line at `index` branches from.
    ///
    /// Returns `None` if no earlier line encloses the line, or if `index` is out of bounds.
    pub fn locate(&mut self, index: NodeIndex) -> Option<NodeIndex> {
        let lines = self.lines;
        let line = lines.get(index)?;

        debug_assert!(
            index >= self.num_seen,
            "lines must be located in order when building a tree"
        );

        while self.num_seen < index {
            self.see(self.num_seen);
            self.num_seen += 1;
        }

        // The line at `index` is seen next, after which none of these can enclose anything
        while let Some(&prior) = self.open.last() {
            if lines[prior].depth < line.depth {
                return Some(prior);
            }

            self.open.pop();
        }

        match self.shallowest {
            Some((depth, plot)) if line.is_option() && depth == line.depth => plot,
            _ => None,
        }
    }

    fn see(&mut self, index: NodeIndex) {
        let lines = self.lines;
        let line = &lines[index];

        while let Some(&prior) = self.open.last() {
            if lines[prior].depth < line.depth {
                break;
            }

            self.open.pop();
        }

        self.open.push(index);

        let plot = if line.is_option() { None } else { Some(index) };

        self.shallowest = match self.shallowest {
            Some((depth, _)) if line.depth < depth => Some((line.depth, plot)),
            Some((depth, nearest)) if line.depth == depth => Some((depth, plot.or(nearest))),
            None => Some((line.depth, plot)),
            unchanged => unchanged,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{line::parse_lines, utils::MetaData};

    fn get_lines(lines: &[&str]) -> Vec<ParsedLine> {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (*line, MetaData::from(i)))
            .collect();

        parse_lines(lines, "#")
    }

    fn locate(lines: &[ParsedLine], index: NodeIndex) -> Option<NodeIndex> {
        Locator::new(lines).locate(index)
    }

    #[test]
    fn nearest_shallower_line_is_found() {
        let lines = get_lines(&["Start", "  #Go left", "    Left path", "  #Go right"]);
        assert_eq!(locate(&lines, 3), Some(0));
    }

    #[test]
    fn nearer_lines_are_preferred_over_earlier_ones() {
        let lines = get_lines(&[
            "Start",
            "  #Go left",
            "    Left path",
            "      #Climb",
            "        Summit",
            "      #Descend",
        ]);

        assert_eq!(locate(&lines, 5), Some(2));
    }

    #[test]
    fn lines_can_be_located_one_after_another() {
        let lines = get_lines(&[
            "The road forks.",
            "  #Go left",
            "    A wolf blocks the path.",
            "      #Fight",
            "        You win.",
            "      #Flee",
            "        You escape.",
            "  #Go right",
        ]);

        let mut locator = Locator::new(&lines);

        assert_eq!(locator.locate(5), Some(2));
        assert_eq!(locator.locate(7), Some(0));
    }

    #[test]
    fn option_lines_match_plot_lines_at_same_depth() {
        let lines = get_lines(&["Start", "#Go left", "  Left path", "#Go right"]);

        let mut locator = Locator::new(&lines);

        assert_eq!(locator.locate(1), Some(0));
        assert_eq!(locator.locate(3), Some(0));
    }

    #[test]
    fn shallower_option_is_preferred_over_plot_at_same_depth() {
        let lines = get_lines(&[
            "Start",
            "  #Go left",
            "    Left path",
            "      #Climb",
            "        Summit",
            "    #Sneak",
        ]);

        assert_eq!(locate(&lines, 5), Some(1));
    }

    #[test]
    fn option_lines_do_not_match_option_lines_at_same_depth() {
        let lines = get_lines(&["Start", "  #Go left", "  #Go right"]);
        assert_eq!(locate(&lines, 2), Some(0));
    }

    #[test]
    fn flush_option_matches_nearest_plot_at_top_depth() {
        let lines = get_lines(&["Start", "#Go left", "Lost plot", "#Go right"]);
        assert_eq!(locate(&lines, 3), Some(2));
    }

    #[test]
    fn plot_lines_do_not_match_lines_at_same_depth() {
        let lines = get_lines(&["Start", "#Go left", "  Left path", "  Lost plot"]);
        assert_eq!(locate(&lines, 3), Some(1));

        let lines = get_lines(&["Start", "#Go left", "Lost plot"]);
        assert_eq!(locate(&lines, 2), None);
    }

    #[test]
    fn line_dedenting_below_all_earlier_lines_is_not_enclosed() {
        let lines = get_lines(&["  Start", "    #Go left", "      Left path", "Lost plot"]);
        assert_eq!(locate(&lines, 3), None);

        let lines = get_lines(&["  Start", "  #Go left", "    Left path", "#Lost"]);
        assert_eq!(locate(&lines, 3), None);
    }

    #[test]
    fn nearest_shallower_line_may_be_an_option() {
        let lines = get_lines(&["Start", "  #Go left", "      Left path", "    #Sneak"]);
        assert_eq!(locate(&lines, 3), Some(1));
    }

    #[test]
    fn first_line_and_out_of_bounds_indices_have_no_match() {
        let lines = get_lines(&["Start"]);

        let mut locator = Locator::new(&lines);

        assert_eq!(locator.locate(0), None);
        assert_eq!(locator.locate(1), None);
    }
}
