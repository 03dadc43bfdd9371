//! Play sessions: a run of rounds between one human and the AI.
//!
//! The session owns the live round and the score. The engine only ever
//! sees a copy of the board when the AI is asked for a move.

use crate::config::GameConfig;
use derive_getters::Getters;
use derive_more::Display;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::{Duration, Instant};
use tictactoe_engine::{
    Board, Game, GameStatus, MoveError, Player, Position, compute_ai_move, compute_ai_move_with,
};
use tracing::{debug, info, instrument, warn};

/// How a finished round ended, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum RoundResult {
    /// The human completed a line.
    #[display("You won this round!")]
    HumanWin,
    /// The AI completed a line.
    #[display("AI has won this round!")]
    AiWin,
    /// The board filled up with no line.
    #[display("It's a draw!")]
    Draw,
}

/// What happened during one human turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// The AI's reply, if it moved.
    pub ai_reply: Option<Position>,
    /// Set when the turn finished the round.
    pub round: Option<RoundResult>,
    /// The board as the finished round left it.
    pub final_board: Option<Board>,
    /// The AI's opening move in the next round, if it opens.
    pub next_opening: Option<Position>,
    /// Set when the session finished with this turn.
    pub session_complete: bool,
}

/// Error from a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum SessionError {
    /// The move was rejected by the round.
    #[display("{}", _0)]
    Move(#[error(not(source))] MoveError),
    /// The session already reached its goal.
    #[display("Session is complete; start a new one to keep playing")]
    SessionComplete,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

/// Score and timing at a point in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct SessionSummary {
    player_name: String,
    human_score: u32,
    ai_score: u32,
    draws: u32,
    rounds_played: u32,
    rounds_won: u32,
    rounds_to_finish: u32,
    elapsed_secs: f64,
    complete: bool,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {}  AI: {}  Draws: {}",
            self.player_name, self.human_score, self.ai_score, self.draws
        )?;
        writeln!(f, "Games Played: {}/{}", self.rounds_won, self.rounds_to_finish)?;
        write!(f, "Total Time: {:.2} seconds", self.elapsed_secs)
    }
}

/// A session of rounds against the AI.
#[derive(Debug, Getters)]
pub struct GameSession {
    config: GameConfig,
    game: Game,
    #[getter(skip)]
    rng: Option<StdRng>,
    human_score: u32,
    ai_score: u32,
    draws: u32,
    rounds_played: u32,
    rounds_won: u32,
    #[getter(skip)]
    started_at: Option<Instant>,
    #[getter(skip)]
    finished_after: Option<Duration>,
}

impl GameSession {
    /// Creates a session; call [`GameSession::start_round`] to begin play.
    #[instrument(skip(config), fields(player = %config.player_name()))]
    pub fn new(config: GameConfig) -> Self {
        info!(difficulty = %config.difficulty(), first = %config.first_player(), "Creating game session");
        let rng = config.seed().map(StdRng::seed_from_u64);
        let game = Game::new(config.opening_mark());
        Self {
            config,
            game,
            rng,
            human_score: 0,
            ai_score: 0,
            draws: 0,
            rounds_played: 0,
            rounds_won: 0,
            started_at: None,
            finished_after: None,
        }
    }

    /// The human's mark.
    pub fn human_mark(&self) -> Player {
        *self.config.human_mark()
    }

    /// The AI's mark.
    pub fn ai_mark(&self) -> Player {
        self.config.ai_mark()
    }

    /// True once the human has reached the configured number of net wins.
    pub fn is_complete(&self) -> bool {
        self.finished_after.is_some()
    }

    /// Time spent in the session so far (frozen once complete).
    pub fn elapsed(&self) -> Duration {
        match (self.finished_after, self.started_at) {
            (Some(total), _) => total,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    /// Clears the board for a new round and starts the clock.
    ///
    /// Returns the AI's opening move when the AI moves first.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) -> Result<Option<Position>, SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        self.started_at.get_or_insert_with(Instant::now);
        self.game.reset(self.config.opening_mark());
        debug!(round = self.rounds_played + 1, "Round started");

        if self.game.to_move() == self.ai_mark() {
            return self.play_ai();
        }
        Ok(None)
    }

    /// Lets the AI move if it is its turn. A full board is a no-op.
    ///
    /// Does not score the round; callers check the status afterwards.
    #[instrument(skip(self))]
    pub(crate) fn play_ai(&mut self) -> Result<Option<Position>, SessionError> {
        if self.game.status().is_over() || self.game.to_move() != self.ai_mark() {
            return Ok(None);
        }

        let ai = self.ai_mark();
        let difficulty = *self.config.difficulty();
        let board = *self.game.board();
        let reply = match self.rng.as_mut() {
            Some(rng) => compute_ai_move_with(&board, difficulty, ai, rng),
            None => compute_ai_move(&board, difficulty, ai),
        };

        match reply {
            Some(pos) => {
                self.game.make_move(ai, pos)?;
                Ok(Some(pos))
            }
            None => {
                warn!("AI found no empty square");
                Ok(None)
            }
        }
    }

    /// Plays the human's move, then the AI's reply if the round goes on.
    ///
    /// A finished round is scored and, unless the session is over, the
    /// next round starts straight away.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, pos: Position) -> Result<TurnReport, SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        self.started_at.get_or_insert_with(Instant::now);

        let human = self.human_mark();
        let mut report = TurnReport::default();
        let mut status = self.game.make_move(human, pos)?;

        if !status.is_over() {
            report.ai_reply = self.play_ai()?;
            status = self.game.status();
        }

        if let Some(result) = self.finish_round(status) {
            report.round = Some(result);
            report.final_board = Some(*self.game.board());
            report.session_complete = self.is_complete();
            if !report.session_complete {
                report.next_opening = self.start_round()?;
            }
        }

        Ok(report)
    }

    /// Returns a snapshot of score and timing.
    #[instrument(skip(self))]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            player_name: self.config.player_name().clone(),
            human_score: self.human_score,
            ai_score: self.ai_score,
            draws: self.draws,
            rounds_played: self.rounds_played,
            rounds_won: self.rounds_won,
            rounds_to_finish: *self.config.rounds_to_finish(),
            elapsed_secs: self.elapsed().as_secs_f64(),
            complete: self.is_complete(),
        }
    }

    /// Scores a finished round.
    ///
    /// A human win adds one to the progress count, an AI win takes one
    /// away (never below zero), a draw leaves it alone. A round still in
    /// progress is not scored.
    fn finish_round(&mut self, status: GameStatus) -> Option<RoundResult> {
        let result = match status {
            GameStatus::InProgress => {
                warn!("Asked to score a round that is still in progress");
                return None;
            }
            GameStatus::Won(mark) if mark == self.human_mark() => {
                self.human_score += 1;
                self.rounds_won += 1;
                RoundResult::HumanWin
            }
            GameStatus::Won(_) => {
                self.ai_score += 1;
                self.rounds_won = self.rounds_won.saturating_sub(1);
                RoundResult::AiWin
            }
            GameStatus::Draw => {
                self.draws += 1;
                RoundResult::Draw
            }
        };
        self.rounds_played += 1;

        info!(
            ?result,
            human = self.human_score,
            ai = self.ai_score,
            progress = self.rounds_won,
            "Round scored"
        );

        if self.rounds_won >= *self.config.rounds_to_finish() {
            let total = self.elapsed();
            self.finished_after = Some(total);
            info!(elapsed_secs = total.as_secs_f64(), "Session complete");
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rounds: u32) -> GameSession {
        GameSession::new(GameConfig::default().with_rounds_to_finish(rounds))
    }

    #[test]
    fn test_progress_rises_and_falls() {
        let mut s = session(3);
        assert_eq!(s.finish_round(GameStatus::Won(Player::X)), Some(RoundResult::HumanWin));
        assert_eq!(s.finish_round(GameStatus::Won(Player::X)), Some(RoundResult::HumanWin));
        assert_eq!(s.finish_round(GameStatus::Won(Player::O)), Some(RoundResult::AiWin));
        assert_eq!(s.rounds_won, 1);
        assert_eq!(s.human_score, 2);
        assert_eq!(s.ai_score, 1);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_progress_never_goes_negative() {
        let mut s = session(3);
        s.finish_round(GameStatus::Won(Player::O));
        s.finish_round(GameStatus::Won(Player::O));
        assert_eq!(s.rounds_won, 0);
        assert_eq!(s.ai_score, 2);
    }

    #[test]
    fn test_draw_leaves_progress_alone() {
        let mut s = session(3);
        s.finish_round(GameStatus::Won(Player::X));
        assert_eq!(s.finish_round(GameStatus::Draw), Some(RoundResult::Draw));
        assert_eq!(s.rounds_won, 1);
        assert_eq!(s.draws, 1);
        assert_eq!(s.rounds_played, 2);
    }

    #[test]
    fn test_session_completes_at_target() {
        let mut s = session(2);
        s.finish_round(GameStatus::Won(Player::X));
        assert!(!s.is_complete());
        s.finish_round(GameStatus::Won(Player::X));
        assert!(s.is_complete());
        assert_eq!(s.start_round(), Err(SessionError::SessionComplete));
        assert!(s.summary().complete);
    }

    #[test]
    fn test_in_progress_round_is_not_scored() {
        let mut s = session(3);
        assert_eq!(s.finish_round(GameStatus::InProgress), None);
        assert_eq!(s.rounds_played, 0);
        assert_eq!(s.draws, 0);
    }

    #[test]
    fn test_ai_move_is_left_for_caller_to_score() {
        let mut s = GameSession::new(
            GameConfig::default().with_difficulty(tictactoe_engine::Difficulty::Impossible),
        );
        s.start_round().unwrap();
        let moves = [
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopRight),
            (Player::X, Position::TopCenter),
            (Player::O, Position::Center),
            (Player::X, Position::MiddleRight),
            (Player::O, Position::MiddleLeft),
            (Player::X, Position::BottomCenter),
        ];
        for (mark, pos) in moves {
            s.game.make_move(mark, pos).unwrap();
        }

        assert_eq!(s.play_ai(), Ok(Some(Position::BottomLeft)));
        assert_eq!(s.game().status(), GameStatus::Won(Player::O));
        assert_eq!(s.rounds_played, 0);
        assert_eq!(s.ai_score, 0);
    }

    #[test]
    fn test_human_mark_o_scores_o_wins() {
        let mut s = GameSession::new(GameConfig::default().with_human_mark(Player::O));
        assert_eq!(s.ai_mark(), Player::X);
        assert_eq!(s.finish_round(GameStatus::Won(Player::O)), Some(RoundResult::HumanWin));
    }
}
