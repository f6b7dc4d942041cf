//! Positional weight tables
//!
//! Every square carries a fixed integer weight. Squares a table does not
//! list explicitly are worth [`UNTABULATED_WEIGHT`]. All built-in tables are
//! symmetric under reflection across both board axes.

use crate::board::{Pos, BOARD_SIZE, TOTAL_CELLS};

/// Weight of any square a table does not list
pub const UNTABULATED_WEIGHT: i32 = -1;

/// Anti-othello table: corners are the worst squares to own, the
/// X-squares next to them the best.
#[rustfmt::skip]
pub const STANDARD_WEIGHTS: [i32; TOTAL_CELLS] = [
    -100, 20, -10, -5, -5, -10, 20, -100,
      20, 50,   2,  2,  2,   2, 50,   20,
     -10,  2,   1,  1,  1,   1,  2,  -10,
      -5,  2,   1,  1,  1,   1,  2,   -5,
      -5,  2,   1,  1,  1,   1,  2,   -5,
     -10,  2,   1,  1,  1,   1,  2,  -10,
      20, 50,   2,  2,  2,   2, 50,   20,
    -100, 20, -10, -5, -5, -10, 20, -100,
];

/// Tier values for [`WeightTable::tiered`]
pub struct Tier;

impl Tier {
    pub const CORNER: i32 = 25;
    pub const CORNER_ADJACENT: i32 = -5;
    pub const EDGE: i32 = 5;
}

/// Built-in table selector, used by configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPreset {
    #[default]
    Standard,
    Tiered,
}

impl WeightPreset {
    pub fn table(self) -> WeightTable {
        match self {
            WeightPreset::Standard => WeightTable::standard(),
            WeightPreset::Tiered => WeightTable::tiered(),
        }
    }
}

/// Per-square weights, indexed like the board (`x + 8 * y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: [i32; TOTAL_CELLS],
}

impl WeightTable {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            weights: STANDARD_WEIGHTS,
        }
    }

    /// Graduated table: corners, the three squares touching each corner,
    /// the remaining edge squares. Interior squares stay untabulated.
    ///
    /// The table is static. Corner-adjacent squares are always worth
    /// [`Tier::CORNER_ADJACENT`]; they do not switch to [`Tier::EDGE`] when
    /// the evaluating side owns the corner, since a weight table cannot
    /// depend on the contents of other squares.
    #[must_use]
    pub fn tiered() -> Self {
        let last = BOARD_SIZE as u8 - 1;
        let is_corner = |v: u8| v == 0 || v == last;
        let near_corner = |v: u8| v <= 1 || v >= last - 1;

        Self::from_entries(Pos::all().filter_map(|pos| {
            let on_edge = is_corner(pos.x) || is_corner(pos.y);
            let weight = if is_corner(pos.x) && is_corner(pos.y) {
                Tier::CORNER
            } else if near_corner(pos.x) && near_corner(pos.y) {
                Tier::CORNER_ADJACENT
            } else if on_edge {
                Tier::EDGE
            } else {
                return None;
            };
            Some((pos, weight))
        }))
    }

    /// Build a table from explicit entries; every other square gets
    /// [`UNTABULATED_WEIGHT`]. Later entries override earlier ones.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (Pos, i32)>) -> Self {
        let mut weights = [UNTABULATED_WEIGHT; TOTAL_CELLS];
        for (pos, weight) in entries {
            weights[pos.to_index()] = weight;
        }
        Self { weights }
    }

    #[inline]
    pub fn weight(&self, pos: Pos) -> i32 {
        self.weights[pos.to_index()]
    }

    /// Check reflection symmetry across both axes.
    pub fn is_symmetric(&self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        Pos::all().all(|pos| {
            let w = self.weight(pos);
            w == self.weight(Pos::new(last - pos.x, pos.y))
                && w == self.weight(Pos::new(pos.x, last - pos.y))
        })
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
