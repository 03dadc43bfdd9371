//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` holds all three squares of any winning line.
///
/// Called at every node of the search, so it is not instrumented.
pub fn has_won(board: &Board, mark: Player) -> bool {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first completed line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Player, line: [Position; 3]) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins_independently() {
        for line in LINES {
            for mark in [Player::X, Player::O] {
                let board = board_with(mark, line);
                assert!(has_won(&board, mark), "{:?} should win on {:?}", mark, line);
                assert!(!has_won(&board, mark.opponent()));
                assert_eq!(check_winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            [Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // X O X / O X O / O X O
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }
}
