//! Five-in-a-row game engine with a heuristic opponent
//!
//! A rules engine for generalized connection games on a square board:
//! - Configurable board size (default 15x15)
//! - Configurable connection length (default 5, overlines win)
//! - Undo, pause/resume and log replay
//! - Three-tier AI opponent (easy / normal / hard)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Win and draw detection
//! - [`game`]: Game state machine (place, undo, status, history)
//! - [`config`]: Game configuration and difficulty tiers
//! - [`eval`]: Pattern-based cell evaluation
//! - [`search`]: Immediate win/block scans
//! - [`engine`]: AI move selector integrating the above
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Difficulty, Game, GameConfig, GameStatus, Pos, Stone};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! game.place(Pos::new(7, 7));
//!
//! // AI responds as Second
//! let mut engine = AIEngine::new(Stone::Second, Difficulty::Normal);
//! if let Some(pos) = engine.get_move(&game) {
//!     game.place(pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```
//!
//! # Move Priority
//!
//! The normal and hard tiers follow this priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Highest pattern score, nudged toward the centre
//!
//! # Logging
//!
//! Events are emitted through `tracing`; the library never installs a
//! subscriber.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_COUNT};
pub use config::{Difficulty, GameConfig, GameMode};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, MoveError, ParseDifficultyError};
pub use game::{Game, GameSnapshot, GameStatus, MoveRecord};
