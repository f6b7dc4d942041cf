//! Anti-othello AI engine
//!
//! An alpha-beta engine for anti-othello (reversi where the positional score
//! is inverted) on the standard 8x8 board:
//! - Discs are flipped along every ray closed by a disc of the mover
//! - A move is legal only if it flips at least one disc
//! - Positions are scored with a per-cell weight table, corners weighted
//!   heavily against the owner
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legality and move application
//! - [`eval`]: Weight tables, positional scoring and the score cache
//! - [`search`]: Alpha-beta search and an unpruned reference minimax
//! - [`notation`]: Algebraic squares (`a1`..`h8`)
//! - [`engine`]: Main AI engine integrating all components
//! - [`protocol`]: Line-oriented driver protocol
//!
//! # Quick Start
//!
//! ```
//! use anti_othello::{Board, Color, Engine, Pos};
//!
//! let mut engine = Engine::new(Color::White);
//!
//! // Black opens on d3
//! engine.apply_move(Color::Black, Pos::new(3, 2));
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move() {
//!     engine.apply_move(Color::White, pos);
//!     println!("AI plays {pos}");
//! }
//! assert_ne!(*engine.board(), Board::initial());
//! ```
//!
//! # Search
//!
//! The root depth drops by one ply when the side to move has many options,
//! ties go to the first move in row-major order, and leaves are worth the
//! negated positional score of the root side.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod notation;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Opening, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{Engine, MoveResult};
pub use error::{GameError, GameResult};
pub use search::{Decision, Recursion};
