//! Search module for the anti-othello engine
//!
//! Contains:
//! - Alpha-Beta search with root depth adaptation
//! - Unpruned minimax over the same recursion, for verification

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{
    Decision, Recursion, SearchParams, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF,
    MAX_CHOICES,
};
