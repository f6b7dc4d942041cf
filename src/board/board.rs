//! Immutable board value

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Color, Opening, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// Two bitboards, `Copy`, never mutated once handed out: every move
/// produces a new value, so search branches cannot observe each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board with no seed discs
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard starting position: d4/e5 White, e4/d5 Black.
    pub fn initial() -> Self {
        Self::with_opening(Opening::Standard)
    }

    pub fn with_opening(opening: Opening) -> Self {
        let (diagonal, anti_diagonal) = match opening {
            Opening::Standard => (Cell::White, Cell::Black),
            Opening::Swapped => (Cell::Black, Cell::White),
            Opening::Empty => return Self::empty(),
        };

        Self::empty()
            .with_cell(Pos::new(3, 3), diagonal)
            .with_cell(Pos::new(4, 4), diagonal)
            .with_cell(Pos::new(3, 4), anti_diagonal)
            .with_cell(Pos::new(4, 3), anti_diagonal)
    }

    /// Build a board from 64 cells in index order (`x + 8 * y`).
    pub fn from_cells(cells: &[Cell; TOTAL_CELLS]) -> Self {
        cells
            .iter()
            .enumerate()
            .fold(Self::empty(), |board, (idx, &cell)| {
                board.with_cell(Pos::from_index(idx), cell)
            })
    }

    /// Copy of this board with one square overwritten, no flipping.
    #[must_use]
    pub fn with_cell(mut self, pos: Pos, cell: Cell) -> Self {
        self.black.clear(pos);
        self.white.clear(pos);
        match cell {
            Cell::Black => self.black.set(pos),
            Cell::White => self.white.set(pos),
            Cell::Empty => {}
        }
        self
    }

    /// Copy of this board after `color` plays at `pos`, with flips.
    ///
    /// Thin wrapper over [`crate::rules::apply_move`]; see there for the
    /// behaviour on squares that are not legal.
    #[must_use]
    pub fn with_move(&self, pos: Pos, color: Color) -> Self {
        crate::rules::apply_move(self, pos, color)
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Get cell at 0-indexed file `x` and rank `y`
    #[inline]
    pub fn cell_at(&self, x: u8, y: u8) -> Cell {
        self.get(Pos::new(x, y))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Get bitboard for a color
    #[inline]
    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    pub fn disc_count(&self, color: Color) -> u32 {
        self.discs(color).count()
    }

    /// Total discs on board
    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.occupied_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Exact 128-bit encoding of the cell contents
    #[inline]
    pub fn key(&self) -> (u64, u64) {
        (self.black.bits(), self.white.bits())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for y in 0..BOARD_SIZE as u8 {
            write!(f, "{}", y + 1)?;
            for x in 0..BOARD_SIZE as u8 {
                let c = match self.cell_at(x, y) {
                    Cell::Empty => '-',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
