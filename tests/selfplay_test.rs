//! Tests for self-play and one-shot suggestions.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_ai::{MatchStats, play_match, run_matches, side_to_move, suggest};
use tictactoe_engine::{Board, Difficulty, GameStatus, Player};

#[test]
fn test_perfect_play_always_draws() {
    let stats = run_matches(Difficulty::Impossible, Difficulty::Impossible, 2, 0);
    assert_eq!(stats.games, 2);
    assert_eq!(stats.draws, 2);
}

#[test]
fn test_impossible_o_never_loses() {
    let stats = run_matches(Difficulty::Easy, Difficulty::Impossible, 8, 3);
    assert_eq!(stats.games, 8);
    assert_eq!(stats.x_wins, 0);
}

#[test]
fn test_random_match_finishes() {
    let mut rng = StdRng::seed_from_u64(9);
    let game = play_match(Difficulty::Easy, Difficulty::Easy, &mut rng);
    assert!(game.status().is_over());
    assert!(game.history().len() >= 5);
}

#[test]
fn test_stats_record() {
    let mut stats = MatchStats::default();
    stats.record(GameStatus::Won(Player::X));
    stats.record(GameStatus::Won(Player::O));
    stats.record(GameStatus::Draw);
    assert_eq!(
        stats,
        MatchStats {
            games: 3,
            x_wins: 1,
            o_wins: 1,
            draws: 1
        }
    );
    assert_eq!(stats.to_string(), "3 games: X won 1, O won 1, 1 draws");
}

#[test]
fn test_unfinished_round_is_not_recorded() {
    let mut stats = MatchStats::default();
    stats.record(GameStatus::InProgress);
    assert_eq!(stats, MatchStats::default());
    stats.record(GameStatus::Draw);
    assert_eq!(stats.games, 1);
    assert_eq!(stats.draws, 1);
}

#[test]
fn test_side_to_move_from_counts() {
    assert_eq!(side_to_move(&Board::new()), Player::X);
    let board: Board = "X.. ... ...".parse().unwrap();
    assert_eq!(side_to_move(&board), Player::O);
}

#[test]
fn test_suggest_blocks() {
    let board: Board = "XX. .O. ...".parse().unwrap();
    let suggestion = suggest(&board, None, Difficulty::Impossible, None);
    assert_eq!(suggestion.mark, Player::O);
    assert_eq!(suggestion.index, Some(2));
    assert_eq!(suggestion.cell, Some(3));
    assert!(!suggestion.game_over);
    assert_eq!(suggestion.to_string(), "O plays cell 3 (impossible)");
}

#[test]
fn test_suggest_on_full_board() {
    let board: Board = "XOX OXX OXO".parse().unwrap();
    let suggestion = suggest(&board, Some(Player::X), Difficulty::Easy, Some(1));
    assert_eq!(suggestion.index, None);
    assert_eq!(suggestion.to_string(), "X has no move");
}

#[test]
fn test_suggestion_serializes() {
    let board: Board = "OO. XX. X..".parse().unwrap();
    let suggestion = suggest(&board, Some(Player::O), Difficulty::Impossible, None);
    let json = serde_json::to_value(&suggestion).unwrap();
    assert_eq!(json["mark"], "O");
    assert_eq!(json["difficulty"], "impossible");
    assert_eq!(json["index"], 2);
}
