// Line markers
pub const DEFAULT_OPTION_PREFIX: &'static str = "#";

// Indentation
pub const INDENT_CHAR: char = ' ';
pub const TAB_CHAR: char = '\t';

// Index of the root plot node in a built tree
pub const ROOT_NODE_INDEX: usize = 0;
