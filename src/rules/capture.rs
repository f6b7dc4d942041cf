//! Directional capture rules
//!
//! Capture pattern along any of the 8 compass rays: X-O-...-O-X, where X is
//! the disc being placed and the closing disc of the same colour, and every
//! O in between is an opponent disc. All O discs on every such ray flip.

use crate::board::{Bitboard, Board, Color, Pos};

/// Direction vectors for capture checking (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (0, -1),  // ↑
    (1, -1),  // ↗
    (-1, 0),  // ←
    (1, 0),   // →
    (-1, 1),  // ↙
    (0, 1),   // ↓
    (1, 1),   // ↘
];

/// Discs that would flip along one ray if `color` played at `pos`.
///
/// Walks outward from `pos`: one or more opponent discs followed by a disc
/// of `color` is a capture. Running off the board or reaching an empty
/// square first captures nothing. The contents of `pos` itself are ignored.
pub fn captures_in_direction(board: &Board, pos: Pos, color: Color, dir: (i32, i32)) -> Bitboard {
    let opponent = color.opponent().to_cell();
    let own = color.to_cell();
    let (dx, dy) = dir;

    let mut run = Bitboard::new();
    let mut cursor = pos.offset(dx, dy);
    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opponent {
            run.set(p);
            cursor = p.offset(dx, dy);
        } else if cell == own {
            // An adjacent own disc leaves `run` empty, which captures nothing
            return run;
        } else {
            break;
        }
    }

    Bitboard::new()
}

/// Check whether at least one ray from `pos` captures.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| !captures_in_direction(board, pos, color, dir).is_empty())
}

/// Union of the captures over all 8 rays.
pub fn flipped(board: &Board, pos: Pos, color: Color) -> Bitboard {
    let bits = DIRECTIONS.iter().fold(0u64, |acc, &dir| {
        acc | captures_in_direction(board, pos, color, dir).bits()
    });
    Bitboard::from_bits(bits)
}

/// Positions that would flip if `color` played at `pos`, in row-major order.
pub fn flipped_positions(board: &Board, pos: Pos, color: Color) -> Vec<Pos> {
    flipped(board, pos, color).iter_ones().collect()
}

/// Place `color` at `pos` and flip every captured disc.
///
/// Precondition (not enforced): the move is legal. On an illegal square the
/// disc is placed anyway and nothing flips, which is what the driver relies
/// on for its trusted `move` commands. Use
/// [`try_apply_move`](super::try_apply_move) for a checked variant.
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, color: Color) -> Board {
    let flips = flipped(board, pos, color).bits();
    let placed = flips | (1u64 << pos.to_index());

    let own = board.discs(color).bits() | placed;
    let opp = board.discs(color.opponent()).bits() & !placed;

    let (black, white) = match color {
        Color::Black => (own, opp),
        Color::White => (opp, own),
    };
    Board {
        black: Bitboard::from_bits(black),
        white: Bitboard::from_bits(white),
    }
}
