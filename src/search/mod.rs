//! Search module for the move selector
//!
//! Contains one-ply threat scans (immediate wins and forced blocks).

pub mod threat;

pub use threat::{find_blocking_moves, find_winning_moves, first_winning_move};
