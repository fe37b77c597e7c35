//! Game configuration.
//!
//! A [`GameConfig`] is fixed for the lifetime of a [`Game`](crate::Game);
//! changing it means constructing a new game.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_COUNT, MAX_BOARD_SIZE};
use crate::error::{ConfigError, ParseDifficultyError};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[default]
    PvP,
    /// Player vs AI
    PvE { human: Stone },
}

/// Strength tier of the heuristic opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random among empty cells
    Easy,
    /// Win, else block, else best pattern score
    #[default]
    Normal,
    /// Same priorities as `Normal`, with win and block sets computed in full
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Configuration for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Contiguous stones needed to win. Must fit on the board.
    pub win_count: usize,

    /// Who is playing.
    pub mode: GameMode,

    /// Opponent strength, when an AI takes part.
    pub difficulty: Option<Difficulty>,

    /// Per-move time limit. Stored for the host; the core never enforces it.
    pub time_limit: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_count: DEFAULT_WIN_COUNT,
            mode: GameMode::default(),
            difficulty: None,
            time_limit: None,
        }
    }
}

impl GameConfig {
    /// Create a config with the given geometry and default everything else.
    #[must_use]
    pub fn new(board_size: usize, win_count: usize) -> Self {
        Self {
            board_size,
            win_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_count == 0 {
            return Err(ConfigError::WinCountTooSmall(self.win_count));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.win_count > self.board_size {
            return Err(ConfigError::WinCountExceedsBoard {
                board_size: self.board_size,
                win_count: self.win_count,
            });
        }
        Ok(())
    }
}
