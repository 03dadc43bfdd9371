//! Tests for the terminal front-end.

use tictactoe_ai::{FirstPlayer, GameConfig, GameSession, terminal};
use tictactoe_engine::{Difficulty, select_optimal_move};

fn run_script(config: GameConfig, script: &str) -> (String, tictactoe_ai::SessionSummary) {
    let mut session = GameSession::new(config);
    let mut out = Vec::new();
    let summary = terminal::run(&mut session, script.as_bytes(), &mut out).expect("session runs");
    (String::from_utf8(out).expect("utf-8 output"), summary)
}

fn impossible() -> GameConfig {
    GameConfig::default()
        .with_player_name("Ada")
        .with_difficulty(Difficulty::Impossible)
}

#[test]
fn test_invalid_input_reprompts() {
    let (out, summary) = run_script(impossible(), "abc\n0\n5\nq\n");
    assert_eq!(out.matches("Please enter a number from 1 to 9.").count(), 2);
    assert!(out.contains("AI plays 1 (Top-left)"));
    assert_eq!(*summary.rounds_played(), 0);
}

#[test]
fn test_occupied_square_is_reported() {
    let (out, _) = run_script(impossible(), "5\n5\nq\n");
    assert!(out.contains("Square Center is already occupied"));
}

#[test]
fn test_lost_round_is_announced() {
    let (out, summary) = run_script(impossible(), "1\n2\n4\nq\n");
    assert!(out.contains("Game Over: AI has won this round!"));
    assert!(out.contains("Games Played: 0/3"));
    assert!(out.contains("New round!"));
    assert_eq!(*summary.ai_score(), 1);
}

#[test]
fn test_score_command() {
    let (out, _) = run_script(impossible(), "r\nq\n");
    assert!(out.contains("Ada: 0  AI: 0  Draws: 0"));
}

#[test]
fn test_ai_opening_is_printed() {
    let config = impossible().with_first_player(FirstPlayer::Ai);
    let (out, _) = run_script(config, "");
    assert!(out.contains("AI plays 1 (Top-left)"));
    assert!(out.contains("O|2|3"));
}

fn seeded_easy() -> GameConfig {
    GameConfig::default()
        .with_player_name("Ada")
        .with_difficulty(Difficulty::Easy)
        .with_rounds_to_finish(1)
        .with_seed(Some(5))
}

/// Cell numbers a perfect human plays to finish a session with this config.
fn winning_script(config: GameConfig) -> String {
    let mut session = GameSession::new(config);
    session.start_round().expect("session running");
    let mut script = String::new();
    while !session.is_complete() {
        assert!(script.len() < 2000, "session did not finish");
        let mut scratch = *session.game().board();
        let pos = select_optimal_move(&mut scratch, session.human_mark()).expect("board not full");
        session.play_human(pos).expect("legal move");
        script.push_str(&format!("{}\n", pos.to_index() + 1));
    }
    script
}

#[test]
fn test_completed_session_prints_summary() {
    let script = winning_script(seeded_easy());
    let (out, summary) = run_script(seeded_easy(), &script);

    assert!(*summary.complete());
    assert!(out.contains("Game Over: You won this round!"));
    assert!(out.contains(&format!(
        "You reached 1 net round wins in {} rounds.",
        summary.rounds_played()
    )));
    assert!(out.contains("Ada: 1  AI: 0"));
    assert!(out.contains("Total Time:"));
}
