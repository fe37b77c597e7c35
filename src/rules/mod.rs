//! Game rules for five-in-a-row
//!
//! Only connection wins exist: no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, count_direction, find_line_at, find_winning_line, has_win_at, is_draw,
    DIRECTIONS,
};
