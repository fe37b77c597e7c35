//! Immediate threat search
//!
//! One-ply scans used by the move selector: which empty cells win on the
//! spot, and which cells the opponent would win on next turn. Every scan
//! plays its hypothetical stones on a private copy of the board.

use crate::board::{Board, Pos, Stone};
use crate::rules::has_win_at;

/// All cells among `candidates` where `stone` completes a winning line,
/// in the order given.
pub fn find_winning_moves(
    board: &Board,
    candidates: &[Pos],
    stone: Stone,
    win_count: usize,
) -> Vec<Pos> {
    let mut scratch = board.clone();
    candidates
        .iter()
        .copied()
        .filter(|&pos| wins_on(&mut scratch, pos, stone, win_count))
        .collect()
}

/// First cell among `candidates` where `stone` wins, if any.
pub fn first_winning_move(
    board: &Board,
    candidates: &[Pos],
    stone: Stone,
    win_count: usize,
) -> Option<Pos> {
    let mut scratch = board.clone();
    candidates
        .iter()
        .copied()
        .find(|&pos| wins_on(&mut scratch, pos, stone, win_count))
}

/// Cells `mover` must occupy to stop the opponent winning next turn.
pub fn find_blocking_moves(
    board: &Board,
    candidates: &[Pos],
    mover: Stone,
    win_count: usize,
) -> Vec<Pos> {
    find_winning_moves(board, candidates, mover.opponent(), win_count)
}

/// Play `stone` at `pos` on the scratch board, test for a win, take it back.
#[inline]
fn wins_on(scratch: &mut Board, pos: Pos, stone: Stone, win_count: usize) -> bool {
    if !scratch.contains(pos) || !scratch.is_empty(pos) {
        return false;
    }
    scratch.place_stone(pos, stone);
    let wins = has_win_at(scratch, pos, stone, win_count);
    scratch.remove_stone(pos);
    wins
}
