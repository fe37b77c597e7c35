use crate::board::Pos;
use crate::game::GameStatus;

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("win count {win_count} does not fit on a {board_size}x{board_size} board")]
    WinCountExceedsBoard { board_size: usize, win_count: usize },

    #[error("win count must be at least 1, got {0}")]
    WinCountTooSmall(usize),

    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
}

/// Reasons a placement or undo was rejected. State is never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {0} is off the board")]
    OutOfBounds(Pos),

    #[error("position {0} is already occupied")]
    Occupied(Pos),

    #[error("game is not in progress (status: {0:?})")]
    NotPlaying(GameStatus),

    #[error("no moves to undo")]
    NothingToUndo,
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, normal or hard)")]
pub struct ParseDifficultyError(pub String);
