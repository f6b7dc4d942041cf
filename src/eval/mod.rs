//! Evaluation module for anti-othello positions
//!
//! Positions are scored with a static per-square weight table. The
//! evaluation considers nothing but which colour occupies which square.

pub mod cache;
pub mod heuristic;
pub mod weights;

pub use cache::{CacheStats, EvalCache};
pub use heuristic::{evaluate, score_both, Evaluator, SCORE_LIMIT};
pub use weights::{WeightPreset, WeightTable, STANDARD_WEIGHTS, UNTABULATED_WEIGHT};
