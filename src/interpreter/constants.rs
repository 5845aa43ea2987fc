// Constants for the expression evaluator

/// Rank of the `=` terminator. Never matched by a reduction pass.
pub const RANK_END: u8 = 0;

/// Rank of `^`
pub const RANK_POW: u8 = 1;

/// Rank of `*` and `/`
pub const RANK_MUL_DIV: u8 = 2;

/// Rank of `+` and `-`
pub const RANK_ADD_SUB: u8 = 3;

/// Ranks in the order the reducer visits them
pub const REDUCTION_ORDER: [u8; 3] = [RANK_POW, RANK_MUL_DIV, RANK_ADD_SUB];

/// Longest accepted input line, in characters
pub const DEFAULT_MAX_LINE_LEN: usize = 125;

/// A line starting with this character ends the session
pub const SENTINEL: char = '0';

pub const DEFAULT_PROMPT: &str = "CALCULATOR: ";
