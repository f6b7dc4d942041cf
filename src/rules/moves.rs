//! Legality and move generation

use tracing::trace;

use crate::board::{Board, Color, Pos};
use crate::error::{GameError, GameResult};

use super::capture::{apply_move, has_capture};

/// Check if `color` may play at `pos`.
///
/// A move is legal if:
/// 1. The square is empty
/// 2. At least one of the 8 rays from it captures
///
/// A square without occupied neighbours can never capture, so it is
/// rejected by rule 2 without a separate check.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, color: Color) -> bool {
    board.is_empty(pos) && has_capture(board, pos, color)
}

/// All legal moves in row-major order (`y` outer, `x` inner).
///
/// The order is part of the search contract: ties go to the first move.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Pos> {
    Pos::all().filter(|&pos| is_legal(board, pos, color)).collect()
}

/// Check if `color` has any move at all. Stops at the first one found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    Pos::all().any(|pos| is_legal(board, pos, color))
}

/// Ordered `(move, resulting board)` pairs for every legal move.
pub fn successors(board: &Board, color: Color) -> Vec<(Pos, Board)> {
    Pos::all()
        .filter(|&pos| is_legal(board, pos, color))
        .map(|pos| (pos, apply_move(board, pos, color)))
        .collect()
}

/// Checked move application.
///
/// Returns [`GameError::IllegalMove`] instead of placing a disc that
/// captures nothing.
pub fn try_apply_move(board: &Board, pos: Pos, color: Color) -> GameResult<Board> {
    if !is_legal(board, pos, color) {
        trace!(%pos, %color, "rejected illegal move");
        return Err(GameError::IllegalMove { square: pos, color });
    }
    Ok(apply_move(board, pos, color))
}

/// Neither side can move: the game is over.
pub fn is_game_over(board: &Board) -> bool {
    !has_any_legal_move(board, Color::Black) && !has_any_legal_move(board, Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Opening};

    #[test]
    fn test_standard_opening_moves() {
        let board = Board::initial();
        assert_eq!(
            legal_moves(&board, Color::Black),
            vec![Pos::new(3, 2), Pos::new(2, 3), Pos::new(5, 4), Pos::new(4, 5)]
        );
        assert_eq!(
            legal_moves(&board, Color::White),
            vec![Pos::new(4, 2), Pos::new(5, 3), Pos::new(2, 4), Pos::new(3, 5)]
        );
    }

    #[test]
    fn test_swapped_opening_moves() {
        let board = Board::with_opening(Opening::Swapped);
        assert_eq!(
            legal_moves(&board, Color::Black),
            vec![Pos::new(4, 2), Pos::new(5, 3), Pos::new(2, 4), Pos::new(3, 5)]
        );
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let board = Board::with_opening(Opening::Empty);
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal(&board, Pos::new(3, 3), Color::Black));
        assert!(!is_legal(&board, Pos::new(4, 3), Color::Black));
    }

    #[test]
    fn test_isolated_square_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal(&board, Pos::new(0, 0), Color::Black));
        assert!(!is_legal(&board, Pos::new(7, 7), Color::White));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let cells = std::array::from_fn(|i| if i % 3 == 0 { Cell::White } else { Cell::Black });
        let board = Board::from_cells(&cells);
        assert!(board.is_full());
        assert!(!has_any_legal_move(&board, Color::Black));
        assert!(!has_any_legal_move(&board, Color::White));
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_successors_pair_moves_with_children() {
        let board = Board::initial();
        let children = successors(&board, Color::Black);
        let moves: Vec<Pos> = children.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(moves, legal_moves(&board, Color::Black));

        for (pos, child) in children {
            assert_eq!(child.get(pos), Cell::Black);
            assert_eq!(child.disc_count(Color::Black), 4);
            assert_eq!(child.disc_count(Color::White), 1);
        }
    }

    #[test]
    fn test_try_apply_move() {
        let board = Board::initial();
        let after = try_apply_move(&board, Pos::new(3, 2), Color::Black).unwrap();
        assert_eq!(after.cell_at(3, 3), Cell::Black);

        let err = try_apply_move(&board, Pos::new(0, 0), Color::Black).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove { square, color: Color::Black } if square == Pos::new(0, 0)
        ));
    }

    #[test]
    fn test_has_any_agrees_with_enumeration() {
        let board = Board::initial().with_move(Pos::new(3, 2), Color::Black);
        for color in [Color::Black, Color::White] {
            assert_eq!(
                has_any_legal_move(&board, color),
                !legal_moves(&board, color).is_empty()
            );
        }
    }
}
