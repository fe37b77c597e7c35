//! Game state machine
//!
//! [`Game`] owns the board, the move log and the turn/status bookkeeping.
//! It is mutated only through [`Game::place`], [`Game::undo`],
//! [`Game::reset`] and [`Game::set_status`]; every read hands out an owned
//! copy so callers can never reach into the live state.
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, GameConfig, GameStatus, Pos, Stone};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! assert!(game.place(Pos::new(7, 7)));
//! assert!(!game.place(Pos::new(7, 7))); // occupied
//! assert_eq!(game.current_player(), Stone::Second);
//!
//! assert!(game.undo());
//! assert_eq!(game.current_player(), Stone::First);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

use std::time::SystemTime;

use tracing::{debug, info, trace};

use crate::board::{Board, Pos, Stone};
use crate::config::{GameConfig, GameMode};
use crate::error::{ConfigError, MoveError};
use crate::rules::find_line_at;

/// Overall state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are accepted
    Playing,
    FirstWins,
    SecondWins,
    /// Board filled without a winning line
    Draw,
    /// Suspended by the host; resume with `set_status(Playing)`
    Paused,
}

impl GameStatus {
    /// Status for a win by `stone`
    #[inline]
    pub fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::First => GameStatus::FirstWins,
            Stone::Second => GameStatus::SecondWins,
        }
    }

    /// The winner, if this is a win
    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameStatus::FirstWins => Some(Stone::First),
            GameStatus::SecondWins => Some(Stone::Second),
            _ => None,
        }
    }

    /// Win or draw; no further moves or undos
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::FirstWins | GameStatus::SecondWins | GameStatus::Draw
        )
    }
}

/// One entry of the append-only move log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
    /// 1-based; equals the log length right after this record was appended
    pub move_number: usize,
    /// Wall-clock time of the placement
    pub timestamp: SystemTime,
}

/// Read-only copy of everything the move selector needs.
///
/// Owns its data, so it can outlive the game it came from and be handed to
/// another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    /// Empty positions in row-major order
    pub empty: Vec<Pos>,
    pub config: GameConfig,
    /// Player whose turn it is
    pub to_move: Stone,
}

impl GameSnapshot {
    /// Build a snapshot straight from a board, e.g. for analysis positions
    /// that were never played through a [`Game`].
    pub fn from_board(board: Board, config: GameConfig, to_move: Stone) -> Self {
        let empty = board.empty_positions();
        Self {
            board,
            empty,
            config,
            to_move,
        }
    }

    #[inline]
    pub fn win_count(&self) -> usize {
        self.config.win_count
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current_player: Stone,
    status: GameStatus,
    winning_line: Option<Vec<Pos>>,
    history: Vec<MoveRecord>,
    last_move: Option<Pos>,
    /// Stones on the board per player, indexed by `Stone::index`
    move_counts: [usize; 2],
}

impl Game {
    /// Create a new game. Rejects configs where the win count does not fit.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.board_size);
        debug!(
            board_size = config.board_size,
            win_count = config.win_count,
            "new game"
        );
        Ok(Self {
            config,
            board,
            current_player: Stone::First,
            status: GameStatus::Playing,
            winning_line: None,
            history: Vec::new(),
            last_move: None,
            move_counts: [0; 2],
        })
    }

    /// Reinitialize everything for the current config
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.board_size);
        self.current_player = Stone::First;
        self.status = GameStatus::Playing;
        self.winning_line = None;
        self.history.clear();
        self.last_move = None;
        self.move_counts = [0; 2];
        debug!("game reset");
    }

    /// Attempt to place the current player's stone.
    ///
    /// Returns false, changing nothing, when the position is off the board,
    /// already occupied, or the game is not `Playing`.
    pub fn place(&mut self, pos: Pos) -> bool {
        self.try_place(pos).is_ok()
    }

    /// Like [`place`](Self::place) but reports why a move was rejected.
    pub fn try_place(&mut self, pos: Pos) -> Result<MoveRecord, MoveError> {
        if self.status != GameStatus::Playing {
            trace!(%pos, status = ?self.status, "placement rejected");
            return Err(MoveError::NotPlaying(self.status));
        }
        if !self.board.contains(pos) {
            trace!(%pos, "placement off board");
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            trace!(%pos, "placement on occupied cell");
            return Err(MoveError::Occupied(pos));
        }

        let stone = self.current_player;
        self.board.place_stone(pos, stone);

        let record = MoveRecord {
            pos,
            stone,
            move_number: self.history.len() + 1,
            timestamp: SystemTime::now(),
        };
        self.history.push(record.clone());
        self.last_move = Some(pos);
        self.move_counts[stone.index()] += 1;
        debug!(%pos, %stone, move_number = record.move_number, "stone placed");

        if let Some(line) = find_line_at(&self.board, pos, stone, self.config.win_count) {
            self.status = GameStatus::won_by(stone);
            info!(%stone, length = line.len(), "winning line completed");
            self.winning_line = Some(line);
        } else if self.history.len() == self.config.board_size * self.config.board_size {
            self.status = GameStatus::Draw;
            info!(moves = self.history.len(), "board full, game drawn");
        } else {
            self.current_player = stone.opponent();
        }

        Ok(record)
    }

    /// Take back the last move. Only legal while `Playing` with a non-empty log.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Like [`undo`](Self::undo) but returns the removed record or the reason
    /// for refusing.
    pub fn try_undo(&mut self) -> Result<MoveRecord, MoveError> {
        if self.status != GameStatus::Playing {
            trace!(status = ?self.status, "undo rejected");
            return Err(MoveError::NotPlaying(self.status));
        }
        let record = self.history.pop().ok_or(MoveError::NothingToUndo)?;

        self.board.remove_stone(record.pos);
        let count = &mut self.move_counts[record.stone.index()];
        *count = count.saturating_sub(1);
        self.last_move = self.history.last().map(|m| m.pos);
        self.current_player = if self.history.is_empty() {
            Stone::First
        } else {
            record.stone
        };

        debug!(pos = %record.pos, stone = %record.stone, "move undone");
        Ok(record)
    }

    /// Override the status directly.
    ///
    /// Meant for pause/resume by the host; transitions are not validated.
    /// Any non-win status drops the winning line.
    pub fn set_status(&mut self, status: GameStatus) {
        if status != self.status {
            info!(from = ?self.status, to = ?status, "status override");
        }
        if status.winner().is_none() {
            self.winning_line = None;
        }
        self.status = status;
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Independent copy of the board
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Stone at a single position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.board.get(pos)
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning line, present only after a win
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.winning_line.clone()
    }

    /// Copy of the move log
    pub fn history(&self) -> Vec<MoveRecord> {
        self.history.clone()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of moves played so far
    #[inline]
    pub fn move_number(&self) -> usize {
        self.history.len()
    }

    /// Stones `stone` currently has on the board
    #[inline]
    pub fn move_count(&self, stone: Stone) -> usize {
        self.move_counts[stone.index()]
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.board.empty_positions()
    }

    /// Board as it stood after the first `k` moves of the log.
    ///
    /// `k` past the end of the log yields the current board.
    pub fn board_at(&self, k: usize) -> Board {
        Board::replay(
            self.config.board_size,
            self.history.iter().take(k).map(|m| (m.pos, m.stone)),
        )
    }

    /// Owned view for the move selector
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            empty: self.board.empty_positions(),
            config: self.config.clone(),
            to_move: self.current_player,
        }
    }

    /// Check if it's a human's turn. Nobody's turn unless `Playing`.
    pub fn is_human_turn(&self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        match self.config.mode {
            GameMode::PvE { human } => self.current_player == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.config.mode {
            GameMode::PvE { human } => {
                self.status == GameStatus::Playing && self.current_player != human
            }
            GameMode::PvP => false,
        }
    }
}
