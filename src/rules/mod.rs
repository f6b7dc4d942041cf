//! Game rules for anti-othello
//!
//! The rules are those of ordinary Othello; only the scoring differs.
//! This module implements:
//! - Capture rules (directional flanking and flipping)
//! - Legal move generation in row-major order
//! - Game-over detection (neither side can move)

pub mod capture;
pub mod moves;

// Re-exports for convenient access
pub use capture::{
    apply_move, captures_in_direction, flipped, flipped_positions, has_capture, DIRECTIONS,
};
pub use moves::{
    has_any_legal_move, is_game_over, is_legal, legal_moves, successors, try_apply_move,
};
