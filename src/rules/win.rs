//! Win condition checking
//!
//! A player wins by owning `win_count` or more contiguous stones along one of
//! four axes. Overlines count. Checks after a move only look at the lines
//! through the placed stone.

use crate::board::{Board, Pos, Stone};

/// Axis vectors, in the order they are evaluated
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Main diagonal
    (1, -1), // Anti-diagonal
];

/// Count contiguous `stone` cells walking from `pos` along `(dr, dc)`,
/// not counting `pos` itself.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut step = 1;
    while let Some(p) = pos.offset(dr, dc, step, size) {
        if board.get(p) != Some(stone) {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Fast win check through a specific position. No allocation.
///
/// `pos` is treated as holding `stone` whether or not it is on the board yet,
/// so this also answers "would playing here win?".
#[inline]
pub fn has_win_at(board: &Board, pos: Pos, stone: Stone, win_count: usize) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = 1
            + count_direction(board, pos, stone, dr, dc)
            + count_direction(board, pos, stone, -dr, -dc);
        run >= win_count
    })
}

/// Find the winning line through `pos`, if any.
///
/// Axes are tried in [`DIRECTIONS`] order and the first qualifying one is
/// returned. The line holds the whole contiguous run on that axis, ordered
/// from the negative end to the positive end.
pub fn find_line_at(board: &Board, pos: Pos, stone: Stone, win_count: usize) -> Option<Vec<Pos>> {
    let size = board.size();
    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, stone, -dr, -dc);
        let fwd = count_direction(board, pos, stone, dr, dc);
        if 1 + back + fwd < win_count {
            continue;
        }

        let start = back as i32;
        let line = (-start..=fwd as i32)
            .filter_map(|i| pos.offset(dr, dc, i, size))
            .collect();
        return Some(line);
    }
    None
}

/// Find a winning line anywhere on the board for `stone`.
///
/// Scans every stone of that color, so prefer [`find_line_at`] after a move.
pub fn find_winning_line(board: &Board, stone: Stone, win_count: usize) -> Option<Vec<Pos>> {
    board
        .stones()
        .filter(|&(_, s)| s == stone)
        .find_map(|(pos, _)| find_line_at(board, pos, stone, win_count))
}

/// Check for a winner anywhere on the board.
///
/// Returns `Some(Stone)` if either side has a winning line. If both somehow
/// do (only possible on hand-built boards), `First` is reported.
pub fn check_winner(board: &Board, win_count: usize) -> Option<Stone> {
    [Stone::First, Stone::Second]
        .into_iter()
        .find(|&stone| find_winning_line(board, stone, win_count).is_some())
}

/// A draw is a full board without a winning line.
pub fn is_draw(board: &Board, win_count: usize) -> bool {
    board.is_full() && check_winner(board, win_count).is_none()
}
