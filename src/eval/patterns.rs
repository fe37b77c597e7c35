//! Pattern scores for move evaluation
//!
//! A run is the stretch of own stones along one axis through a candidate
//! cell; an open end is an empty cell right past either end of the run.

/// Pattern scores, indexed by run length and open ends
pub struct PatternScore;

impl PatternScore {
    /// Five (or the configured win count) in a row
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_ (two ways to complete)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Score a single axis run.
///
/// Runs of five or more always score [`PatternScore::FIVE`]; so does any run
/// that reaches a shorter `win_count`. Dead fours and anything not in the
/// table score zero.
pub fn run_score(run: usize, open_ends: u8, win_count: usize) -> i32 {
    if run >= 5 || run >= win_count {
        return PatternScore::FIVE;
    }
    match (run, open_ends) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}
