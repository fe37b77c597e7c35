//! Five-in-a-row engine CLI
//!
//! A command-line demonstration of the rules engine and the AI opponent.
//! Runs a few fixed scenarios, then an AI-vs-AI game.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use gomoku::{
    AIEngine, Board, ConfigError, Difficulty, Game, GameConfig, GameSnapshot, GameStatus, Pos,
    Stone,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("===========================================");
    println!("       Five-in-a-row Engine v0.1.0");
    println!("===========================================\n");

    println!("--- Test 1: Empty Board ---");
    test_empty_board()?;

    println!("\n--- Test 2: Find Winning Move ---");
    test_winning_move()?;

    println!("\n--- Test 3: Block Opponent Win ---");
    test_block_opponent()?;

    println!("\n--- Test 4: Undo ---");
    test_undo()?;

    println!("\n--- Test 5: Invalid Config ---");
    test_invalid_config();

    println!("\n--- Test 6: AI vs AI (normal vs hard) ---");
    play_ai_game(Difficulty::Normal, Difficulty::Hard)?;

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
    Ok(())
}

fn report(expected: Pos, got: Option<Pos>) {
    match got {
        Some(m) if m == expected => println!("  Result: PASS"),
        Some(m) => println!("  Result: DIFFERENT ({}, {})", m.row, m.col),
        None => println!("  Result: FAIL - No move found"),
    }
}

fn test_empty_board() -> Result<(), ConfigError> {
    let game = Game::new(GameConfig::default())?;
    let mut engine = AIEngine::new(Stone::First, Difficulty::Normal);
    let result = engine.get_move_with_stats(&game.snapshot());

    println!("  Search type: {:?}", result.search_type);
    println!("  Expected: Center (7, 7)");
    report(Pos::new(7, 7), result.best_move);
    Ok(())
}

fn test_winning_move() -> Result<(), ConfigError> {
    let config = GameConfig::default();
    config.validate()?;
    let mut board = Board::new(config.board_size);
    // First has 4 in a row, needs one more
    for i in 0..4 {
        board.place_stone(Pos::new(7, i), Stone::First);
    }
    let snapshot = GameSnapshot::from_board(board, config, Stone::First);

    let mut engine = AIEngine::new(Stone::First, Difficulty::Normal);
    let result = engine.get_move_with_stats(&snapshot);

    println!("  Position: First has 4 at row 7, cols 0-3");
    println!("  Search type: {:?}", result.search_type);
    println!("  Time: {}ms", result.time_ms);
    println!("  Expected: (7, 4) - Immediate Win");
    report(Pos::new(7, 4), result.best_move);
    Ok(())
}

fn test_block_opponent() -> Result<(), ConfigError> {
    let config = GameConfig::default();
    config.validate()?;
    let mut board = Board::new(config.board_size);
    // Second has 4 in a column
    for i in 3..7 {
        board.place_stone(Pos::new(i, 10), Stone::Second);
    }
    board.place_stone(Pos::new(2, 10), Stone::First);
    board.place_stone(Pos::new(7, 7), Stone::First);
    let snapshot = GameSnapshot::from_board(board, config, Stone::First);

    let mut engine = AIEngine::new(Stone::First, Difficulty::Hard);
    let result = engine.get_move_with_stats(&snapshot);

    println!("  Position: Second has 4 at col 10, rows 3-6");
    println!("  Search type: {:?}", result.search_type);
    println!("  Expected: (7, 10) - Defense");
    report(Pos::new(7, 10), result.best_move);
    Ok(())
}

fn test_undo() -> Result<(), ConfigError> {
    let mut game = Game::new(GameConfig::default())?;
    game.place(Pos::new(7, 7));
    game.place(Pos::new(7, 8));
    let before = game.board();

    game.place(Pos::new(8, 8));
    let undone = game.undo();

    println!("  Undo accepted: {}", undone);
    println!("  Board restored: {}", game.board() == before);
    println!("  Current player: {}", game.current_player());
    Ok(())
}

fn test_invalid_config() {
    match Game::new(GameConfig::new(2, 5)) {
        Ok(_) => println!("  Result: FAIL - 2x2 board with win count 5 accepted"),
        Err(e) => println!("  Rejected: {}\n  Result: PASS", e),
    }
}

fn play_ai_game(first: Difficulty, second: Difficulty) -> Result<(), ConfigError> {
    let mut game = Game::new(GameConfig::default())?;
    let mut first_ai = AIEngine::new(Stone::First, first);
    let mut second_ai = AIEngine::new(Stone::Second, second);

    while game.status() == GameStatus::Playing {
        let engine = match game.current_player() {
            Stone::First => &mut first_ai,
            Stone::Second => &mut second_ai,
        };
        let Some(pos) = engine.get_move(&game) else {
            break;
        };
        if !game.place(pos) {
            println!("  AI proposed an illegal move at ({}, {})", pos.row, pos.col);
            break;
        }
    }

    println!("{}", game.board());
    println!("  Moves played: {}", game.move_number());
    println!("  Status: {:?}", game.status());
    if let Some(line) = game.winning_line() {
        let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
        println!("  Winning line: {}", cells.join(" "));
    }
    Ok(())
}
