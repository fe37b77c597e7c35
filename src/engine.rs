//! Heuristic move selector
//!
//! This module provides the AI opponent. It never touches a live [`Game`];
//! it works from a [`GameSnapshot`] and returns a proposed position that the
//! caller feeds back into [`Game::place`]. The search follows a priority
//! system that depends on the difficulty tier:
//!
//! 0. **Opening**: on an empty board, always the centre cell
//! 1. **Easy**: uniform random among empty cells
//! 2. **Normal / Hard**:
//!    1. Immediate win for the mover
//!    2. Block the opponent's immediate win
//!    3. Best pattern score (attack minus opponent value minus centre distance)
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Difficulty, Game, GameConfig, Pos, Stone};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.place(Pos::new(7, 7));
//!
//! let mut engine = AIEngine::new(Stone::Second, Difficulty::Normal);
//! let result = engine.get_move_with_stats(&game.snapshot());
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//!
//! if let Some(pos) = result.best_move {
//!     assert!(game.place(pos));
//! }
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::config::Difficulty;
use crate::eval::{move_score, PatternScore};
use crate::game::{Game, GameSnapshot};
use crate::search::{find_blocking_moves, find_winning_moves, first_winning_move};

/// Score reported for immediate wins (and, negated, for forced blocks)
const WIN_SCORE: f64 = PatternScore::FIVE as f64;

/// Which layer of the selector produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Centre cell on an empty board
    Opening,
    /// Easy tier random pick
    Random,
    /// Move that wins on the spot
    ImmediateWin,
    /// Move that blocks the opponent's immediate win
    Defense,
    /// Best scored cell
    Heuristic,
    /// Board full, nothing to play
    NoMove,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Heuristic score of the move (0 for opening/random/no move,
    /// +/- five score for wins and blocks)
    pub score: f64,
    /// Layer that chose this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidate cells considered
    pub candidates: usize,
}

impl MoveResult {
    #[inline]
    fn new(
        best_move: Option<Pos>,
        score: f64,
        search_type: SearchType,
        start: Instant,
        candidates: usize,
    ) -> Self {
        Self {
            best_move,
            score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            candidates,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self::new(None, 0.0, SearchType::NoMove, start, 0)
    }
}

/// Heuristic AI opponent.
///
/// Holds the stone it plays, its difficulty tier and the RNG used by the
/// easy tier. Seed it with [`AIEngine::with_seed`] for reproducible games.
#[derive(Debug, Clone)]
pub struct AIEngine {
    stone: Stone,
    difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl AIEngine {
    /// Create a selector for `stone` with an entropy-seeded RNG.
    #[must_use]
    pub fn new(stone: Stone, difficulty: Difficulty) -> Self {
        Self {
            stone,
            difficulty,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a selector with a fixed RNG seed.
    ///
    /// Same seed and same positions produce the same moves.
    #[must_use]
    pub fn with_seed(stone: Stone, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            stone,
            difficulty,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Propose a move against the current state of `game`.
    ///
    /// Returns `None` when the board is full.
    #[must_use]
    pub fn get_move(&mut self, game: &Game) -> Option<Pos> {
        self.next_move(&game.snapshot())
    }

    /// Propose a move for a snapshot. Returns `None` when no cell is empty.
    #[must_use]
    pub fn next_move(&mut self, snapshot: &GameSnapshot) -> Option<Pos> {
        self.get_move_with_stats(snapshot).best_move
    }

    /// Propose a move and report which layer picked it.
    #[must_use]
    pub fn get_move_with_stats(&mut self, snapshot: &GameSnapshot) -> MoveResult {
        let start = Instant::now();
        let board = &snapshot.board;
        let empty = &snapshot.empty;
        let win_count = snapshot.win_count();

        if snapshot.to_move != self.stone {
            trace!(to_move = %snapshot.to_move, mover = %self.stone, "selector asked out of turn");
        }

        if empty.is_empty() {
            debug!("no empty cells, no move");
            return MoveResult::no_move(start);
        }

        // Opening: centre of an empty board, whatever the tier
        if board.is_board_empty() {
            return MoveResult::new(Some(board.center()), 0.0, SearchType::Opening, start, 1);
        }

        let result = match self.difficulty {
            Difficulty::Easy => {
                let pos = empty[self.rng.gen_range(0..empty.len())];
                MoveResult::new(Some(pos), 0.0, SearchType::Random, start, empty.len())
            }
            Difficulty::Normal => self.search_normal(board, empty, win_count, start),
            Difficulty::Hard => self.search_hard(board, empty, win_count, start),
        };

        debug!(
            difficulty = %self.difficulty,
            search_type = ?result.search_type,
            best_move = ?result.best_move,
            score = result.score,
            "move selected"
        );
        result
    }

    /// Win, else block, else best score. Each layer short-circuits the next.
    fn search_normal(
        &self,
        board: &Board,
        empty: &[Pos],
        win_count: usize,
        start: Instant,
    ) -> MoveResult {
        let mover = self.stone;

        if let Some(pos) = first_winning_move(board, empty, mover, win_count) {
            return MoveResult::new(
                Some(pos),
                WIN_SCORE,
                SearchType::ImmediateWin,
                start,
                empty.len(),
            );
        }

        if let Some(pos) = first_winning_move(board, empty, mover.opponent(), win_count) {
            return MoveResult::new(
                Some(pos),
                -WIN_SCORE,
                SearchType::Defense,
                start,
                empty.len(),
            );
        }

        let (pos, score) = best_scored_move(board, empty, mover, win_count);
        MoveResult::new(pos, score, SearchType::Heuristic, start, empty.len())
    }

    /// Fallback first, then full win and block sets; same priority as normal.
    fn search_hard(
        &self,
        board: &Board,
        empty: &[Pos],
        win_count: usize,
        start: Instant,
    ) -> MoveResult {
        let mover = self.stone;
        let (baseline, score) = best_scored_move(board, empty, mover, win_count);

        let wins = find_winning_moves(board, empty, mover, win_count);
        let blocks = find_blocking_moves(board, empty, mover, win_count);
        trace!(wins = wins.len(), blocks = blocks.len(), "threat sets");

        if let Some(&pos) = wins.first() {
            MoveResult::new(
                Some(pos),
                WIN_SCORE,
                SearchType::ImmediateWin,
                start,
                empty.len(),
            )
        } else if let Some(&pos) = blocks.first() {
            MoveResult::new(
                Some(pos),
                -WIN_SCORE,
                SearchType::Defense,
                start,
                empty.len(),
            )
        } else {
            MoveResult::new(baseline, score, SearchType::Heuristic, start, empty.len())
        }
    }
}

/// Highest-scoring cell for `mover`; the first cell to reach the maximum wins
/// ties.
fn best_scored_move(
    board: &Board,
    empty: &[Pos],
    mover: Stone,
    win_count: usize,
) -> (Option<Pos>, f64) {
    let mut best: Option<(Pos, f64)> = None;
    for &pos in empty {
        let score = move_score(board, pos, mover, win_count);
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((pos, score));
        }
    }
    match best {
        Some((pos, score)) => (Some(pos), score),
        None => (None, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn snapshot(board: Board, to_move: Stone) -> GameSnapshot {
        GameSnapshot::from_board(board, GameConfig::default(), to_move)
    }

    #[test]
    fn test_empty_board_plays_center_for_every_tier() {
        let snap = snapshot(Board::new(15), Stone::First);
        for d in Difficulty::ALL {
            let mut engine = AIEngine::with_seed(Stone::First, d, 7);
            let result = engine.get_move_with_stats(&snap);
            assert_eq!(result.best_move, Some(Pos::new(7, 7)));
            assert_eq!(result.search_type, SearchType::Opening);
        }
    }

    #[test]
    fn test_center_uses_integer_division() {
        let config = GameConfig::new(10, 5);
        let snap = GameSnapshot::from_board(Board::new(10), config, Stone::First);
        let mut engine = AIEngine::new(Stone::First, Difficulty::Hard);
        assert_eq!(engine.next_move(&snap), Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_full_board_no_move() {
        let mut board = Board::new(5);
        for (i, pos) in board.empty_positions().into_iter().enumerate() {
            board.place_stone(pos, if i % 2 == 0 { Stone::First } else { Stone::Second });
        }
        let snap = GameSnapshot::from_board(board, GameConfig::new(5, 5), Stone::First);
        for d in Difficulty::ALL {
            let mut engine = AIEngine::new(Stone::First, d);
            let result = engine.get_move_with_stats(&snap);
            assert!(result.best_move.is_none());
            assert_eq!(result.search_type, SearchType::NoMove);
        }
    }

    #[test]
    fn test_easy_returns_empty_cells() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::First);
        board.place_stone(Pos::new(7, 8), Stone::Second);
        let snap = snapshot(board, Stone::First);

        let mut engine = AIEngine::with_seed(Stone::First, Difficulty::Easy, 42);
        for _ in 0..200 {
            let pos = engine.next_move(&snap).unwrap();
            assert!(snap.empty.contains(&pos), "{pos} is not empty");
        }
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(0, 0), Stone::First);
        let snap = snapshot(board, Stone::Second);

        let mut a = AIEngine::with_seed(Stone::Second, Difficulty::Easy, 99);
        let mut b = AIEngine::with_seed(Stone::Second, Difficulty::Easy, 99);
        for _ in 0..20 {
            assert_eq!(a.next_move(&snap), b.next_move(&snap));
        }
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(15);
        // Open four with a stray opponent stone elsewhere
        for c in 3..7 {
            board.place_stone(Pos::new(9, c), Stone::First);
        }
        board.place_stone(Pos::new(0, 0), Stone::Second);
        let snap = snapshot(board, Stone::First);

        for d in [Difficulty::Normal, Difficulty::Hard] {
            let mut engine = AIEngine::new(Stone::First, d);
            let result = engine.get_move_with_stats(&snap);
            // First in scan order of the two completions
            assert_eq!(result.best_move, Some(Pos::new(9, 2)));
            assert_eq!(result.search_type, SearchType::ImmediateWin);
        }
    }

    #[test]
    fn test_engine_completes_closed_four() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(4, 0), Stone::Second);
        for c in 1..5 {
            board.place_stone(Pos::new(4, c), Stone::First);
        }
        let snap = snapshot(board, Stone::First);
        let mut engine = AIEngine::new(Stone::First, Difficulty::Normal);
        assert_eq!(engine.next_move(&snap), Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new(15);
        for c in 0..4 {
            board.place_stone(Pos::new(2, c), Stone::Second); // threat, row 2
            board.place_stone(Pos::new(10, c), Stone::First); // own four, row 10
        }
        let snap = snapshot(board, Stone::First);
        for d in [Difficulty::Normal, Difficulty::Hard] {
            let mut engine = AIEngine::new(Stone::First, d);
            let result = engine.get_move_with_stats(&snap);
            assert_eq!(result.best_move, Some(Pos::new(10, 4)));
            assert_eq!(result.search_type, SearchType::ImmediateWin);
        }
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(15);
        for r in 5..9 {
            board.place_stone(Pos::new(r, 3), Stone::Second);
        }
        board.place_stone(Pos::new(4, 3), Stone::First);
        board.place_stone(Pos::new(12, 12), Stone::First);
        let snap = snapshot(board, Stone::First);

        for d in [Difficulty::Normal, Difficulty::Hard] {
            let mut engine = AIEngine::new(Stone::First, d);
            let result = engine.get_move_with_stats(&snap);
            assert_eq!(result.best_move, Some(Pos::new(9, 3)));
            assert_eq!(result.search_type, SearchType::Defense);
        }
    }

    #[test]
    fn test_heuristic_extends_own_line() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::First);
        board.place_stone(Pos::new(7, 8), Stone::First);
        board.place_stone(Pos::new(0, 14), Stone::Second);
        let snap = snapshot(board, Stone::First);

        let mut engine = AIEngine::new(Stone::First, Difficulty::Normal);
        let result = engine.get_move_with_stats(&snap);
        assert_eq!(result.search_type, SearchType::Heuristic);
        // (7, 6) and (7, 9) both make an open three; (7, 6) is closer to
        // the centre
        assert_eq!(result.best_move, Some(Pos::new(7, 6)));
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_heuristic_ties_go_to_first_cell_in_row_major_order() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::First);
        let snap = snapshot(board, Stone::Second);

        // (5,7), (7,5), (7,9) and (9,7) all score -0.2; every neighbour of
        // (7,7) is worse because it would hand First a two
        for d in [Difficulty::Normal, Difficulty::Hard] {
            let mut engine = AIEngine::new(Stone::Second, d);
            let result = engine.get_move_with_stats(&snap);
            assert_eq!(result.search_type, SearchType::Heuristic);
            assert_eq!(result.best_move, Some(Pos::new(5, 7)), "{d}");
            assert!((result.score - -0.2).abs() < 1e-9, "{d} scored {}", result.score);
        }
    }

    #[test]
    fn test_hard_matches_normal_on_quiet_positions() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::First);
        board.place_stone(Pos::new(6, 8), Stone::Second);
        board.place_stone(Pos::new(8, 8), Stone::First);
        let snap = snapshot(board, Stone::Second);

        let mut normal = AIEngine::new(Stone::Second, Difficulty::Normal);
        let mut hard = AIEngine::new(Stone::Second, Difficulty::Hard);
        assert_eq!(normal.next_move(&snap), hard.next_move(&snap));
    }

    #[test]
    fn test_selector_does_not_touch_game() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.place(Pos::new(7, 7));
        let before = game.board();
        let history = game.history();

        let mut engine = AIEngine::new(Stone::Second, Difficulty::Hard);
        let pos = engine.get_move(&game).unwrap();

        assert_eq!(game.board(), before);
        assert_eq!(game.history(), history);
        assert!(game.place(pos));
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = AIEngine::new(Stone::First, Difficulty::Easy);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.stone(), Stone::First);
    }
}
