//! Round state machine for tic-tac-toe.
//!
//! A round starts empty, accepts alternating moves, and stops at the
//! first completed line or when the board fills up. A finished round
//! rejects further moves until it is reset.

use super::action::{Move, MoveError};
use super::rules::{check_winner, is_full};
use super::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, info, instrument};

/// One round of tic-tac-toe.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new round with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Clears the board for a fresh round.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Player) {
        debug!("Resetting round");
        *self = Self::new(first);
    }

    /// Places `player`'s mark at `pos` and returns the resulting status.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, player: Player, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.to_move = player.opponent();
        self.update_status();

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Round finished");
        }
        Ok(self.status)
    }

    /// Updates round status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
