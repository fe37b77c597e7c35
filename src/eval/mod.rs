//! Evaluation module for the move selector
//!
//! Contains:
//! - Pattern scores (runs and open ends)
//! - Per-cell heuristic scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::{axis_run, center_distance, move_score, position_value, CENTER_WEIGHT};
pub use patterns::{run_score, PatternScore};
