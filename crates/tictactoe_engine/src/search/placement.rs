//! Scoped trial placements for tree search.

use crate::{Board, Player, Position, Square};
use std::ops::{Deref, DerefMut};

/// A hypothetical mark on a borrowed board.
///
/// The square is cleared again when the guard drops, whichever way the
/// enclosing scope is left. The board derefs through the guard so the
/// recursion can keep searching beneath the placement.
pub(crate) struct Trial<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Trial<'a> {
    /// Places `mark` at `pos`, which must be empty.
    pub(crate) fn place(board: &'a mut Board, pos: Position, mark: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial placement on occupied {pos}");
        board.set(pos, Square::Occupied(mark));
        Self { board, pos }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_restores_square_on_drop() {
        let mut board = Board::new();
        {
            let trial = Trial::place(&mut board, Position::Center, Player::X);
            assert_eq!(trial.get(Position::Center), Square::Occupied(Player::X));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_trials_unwind_in_order() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        let before = board;
        {
            let mut outer = Trial::place(&mut board, Position::Center, Player::X);
            {
                let inner = Trial::place(&mut outer, Position::BottomRight, Player::O);
                assert_eq!(inner.count(Player::O), 2);
            }
            assert!(outer.is_empty(Position::BottomRight));
        }
        assert_eq!(board, before);
    }
}
