//! Main engine integrating board state, evaluation and search
//!
//! The engine plays one colour for a whole session. It keeps the session
//! board, applies moves reported by the driver, and answers move requests
//! with an alpha-beta search.
//!
//! # Example
//!
//! ```
//! use anti_othello::{Color, Engine};
//!
//! let mut engine = Engine::new(Color::Black);
//!
//! let result = engine.get_move_with_stats();
//! println!("Best move: {}", result.reply());
//! println!("Time: {}ms", result.time_ms);
//!
//! if let Some(pos) = result.best_move() {
//!     engine.apply_move(Color::Black, pos);
//! }
//! ```

use std::time::Instant;

use tracing::{info, warn};

use crate::board::{Board, Color, Pos};
use crate::config::EngineConfig;
use crate::error::GameResult;
use crate::eval::{CacheStats, Evaluator};
use crate::rules::{apply_move, is_game_over, is_legal};
use crate::search::{Decision, Searcher};

/// Reply sent when the engine has no legal move
pub const PASS_REPLY: &str = "pass";

/// Result of a move request with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub decision: Decision,
    /// Root value under the search's sign convention
    pub score: i32,
    /// Depth searched after root adaptation
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search took longer than the configured budget
    pub overtime: bool,
}

impl MoveResult {
    #[inline]
    pub fn best_move(&self) -> Option<Pos> {
        match self.decision {
            Decision::Play(pos) => Some(pos),
            Decision::Pass => None,
        }
    }

    /// Protocol reply: the algebraic square, or `pass`.
    pub fn reply(&self) -> String {
        match self.decision {
            Decision::Play(pos) => pos.to_string(),
            Decision::Pass => PASS_REPLY.to_string(),
        }
    }
}

/// Anti-othello engine for one colour and one session.
pub struct Engine {
    searcher: Searcher,
    config: EngineConfig,
    color: Color,
    board: Board,
}

impl Engine {
    /// Create an engine with default settings.
    ///
    /// Default configuration:
    /// - Depth 3, reduced to 2 at roots with 8 or more moves
    /// - Fixed-perspective recursion
    /// - Standard weight table with a 65536-slot evaluation cache
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::build(color, EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(color: Color, config: EngineConfig) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::build(color, config))
    }

    fn build(color: Color, config: EngineConfig) -> Self {
        let weights = config.weights.table();
        let evaluator = if config.cache_slots == 0 {
            Evaluator::new(weights)
        } else {
            Evaluator::with_cache(weights, config.cache_slots)
        };

        Self {
            searcher: Searcher::new(evaluator, config.search_params()),
            board: Board::with_opening(config.opening),
            config,
            color,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the session board, e.g. to resume from a known position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Change the search depth.
    pub fn set_depth(&mut self, max_depth: u8) -> GameResult<()> {
        let config = self.config.clone().with_depth(max_depth);
        config.validate()?;
        self.searcher.set_params(config.search_params());
        self.config = config;
        Ok(())
    }

    /// Reset the board to the configured opening and drop cached scores.
    pub fn new_game(&mut self) {
        self.board = Board::with_opening(self.config.opening);
        self.searcher.evaluator_mut().clear_cache();
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.searcher.evaluator().cache_stats()
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Apply a move reported by the driver.
    ///
    /// The driver is trusted: the disc is placed even when the square is
    /// not legal (nothing flips in that case), and only a warning is logged.
    pub fn apply_move(&mut self, color: Color, pos: Pos) {
        if !is_legal(&self.board, pos, color) {
            warn!(%color, %pos, "applying a move that captures nothing");
        }
        self.board = apply_move(&self.board, pos, color);
    }

    /// Best move for the engine's colour, or `None` when it must pass.
    ///
    /// The session board is left unchanged; report the move back through
    /// [`Engine::apply_move`] once it is played.
    #[must_use]
    pub fn get_move(&mut self) -> Option<Pos> {
        self.get_move_with_stats().best_move()
    }

    /// Best move with timing and search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(&self.board, self.color);
        let elapsed = start.elapsed();

        let overtime = elapsed > self.config.time_budget;
        let time_ms = elapsed.as_millis() as u64;
        if overtime {
            warn!(
                time_ms,
                budget_ms = self.config.time_budget.as_millis() as u64,
                "search ran over its time budget"
            );
        }

        let decision = result.decision();
        match decision {
            Decision::Play(pos) => info!(
                color = %self.color,
                %pos,
                depth = result.depth,
                nodes = result.stats.nodes,
                time_ms,
                "move chosen"
            ),
            Decision::Pass => info!(color = %self.color, "no legal move, passing"),
        }

        MoveResult {
            decision,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            overtime,
        }
    }
}
