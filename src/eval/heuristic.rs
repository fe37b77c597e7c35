//! Static evaluation of candidate moves
//!
//! Moves are scored one cell at a time: how good the cell is for the mover,
//! how good it would have been for the opponent, and how far it sits from the
//! centre. Nothing here mutates the board; the candidate cell is treated as
//! holding the evaluated stone without being written.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::run_score;

/// Weight per unit of Manhattan distance from the centre
pub const CENTER_WEIGHT: f64 = 0.1;

/// Walk from `pos` along `(dr, dc)` over `stone` cells.
///
/// Returns the number of matching cells (excluding `pos`) and whether the
/// first cell past them is an empty on-board cell.
#[inline]
fn walk(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (usize, bool) {
    let size = board.size();
    let mut count = 0;
    let mut step = 1;
    loop {
        match pos.offset(dr, dc, step, size) {
            Some(p) => match board.get(p) {
                Some(s) if s == stone => {
                    count += 1;
                    step += 1;
                }
                Some(_) => return (count, false),
                None => return (count, true),
            },
            None => return (count, false),
        }
    }
}

/// Run length through `pos` along one axis and its open-end count (0-2).
#[inline]
pub fn axis_run(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (usize, u8) {
    let (fwd, fwd_open) = walk(board, pos, stone, dr, dc);
    let (back, back_open) = walk(board, pos, stone, -dr, -dc);
    (1 + fwd + back, u8::from(fwd_open) + u8::from(back_open))
}

/// Pattern value of playing `stone` at `pos`, summed over the four axes.
#[must_use]
pub fn position_value(board: &Board, pos: Pos, stone: Stone, win_count: usize) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let (run, open_ends) = axis_run(board, pos, stone, dr, dc);
            run_score(run, open_ends, win_count)
        })
        .sum()
}

/// Manhattan distance from `pos` to the board centre
#[inline]
pub fn center_distance(board: &Board, pos: Pos) -> u32 {
    pos.manhattan(board.center())
}

/// Combined score of a candidate move for `mover`.
///
/// Attack value minus the value the cell would have had for the opponent,
/// with a small pull toward the centre.
#[must_use]
pub fn move_score(board: &Board, pos: Pos, mover: Stone, win_count: usize) -> f64 {
    let attack = position_value(board, pos, mover, win_count);
    let defense = position_value(board, pos, mover.opponent(), win_count);
    f64::from(attack - defense) - CENTER_WEIGHT * f64::from(center_distance(board, pos))
}
