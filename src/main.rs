//! Anti-othello engine driver
//!
//! Speaks the line protocol on stdin/stdout. Logs go to stderr.

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use anti_othello::config::DEFAULT_CACHE_SLOTS;
use anti_othello::eval::WeightPreset;
use anti_othello::protocol::run_session;
use anti_othello::search::{DEFAULT_DEPTH, MAX_CHOICES};
use anti_othello::{Color, EngineConfig, Opening, Recursion};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecursionArg {
    Fixed,
    Alternating,
}

impl From<RecursionArg> for Recursion {
    fn from(arg: RecursionArg) -> Self {
        match arg {
            RecursionArg::Fixed => Recursion::FixedPerspective,
            RecursionArg::Alternating => Recursion::Alternating,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpeningArg {
    Standard,
    Swapped,
    Empty,
}

impl From<OpeningArg> for Opening {
    fn from(arg: OpeningArg) -> Self {
        match arg {
            OpeningArg::Standard => Opening::Standard,
            OpeningArg::Swapped => Opening::Swapped,
            OpeningArg::Empty => Opening::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightsArg {
    Standard,
    Tiered,
}

impl From<WeightsArg> for WeightPreset {
    fn from(arg: WeightsArg) -> Self {
        match arg {
            WeightsArg::Standard => WeightPreset::Standard,
            WeightsArg::Tiered => WeightPreset::Tiered,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Black => Color::Black,
            ColorArg::White => Color::White,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "anti-othello", version, about = "Anti-othello alpha-beta engine")]
struct Cli {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Root move count that costs one ply of depth
    #[arg(long, default_value_t = MAX_CHOICES)]
    max_choices: usize,

    #[arg(long, value_enum, default_value = "fixed")]
    recursion: RecursionArg,

    /// Position a new game starts from
    #[arg(long, value_enum, default_value = "standard")]
    opening: OpeningArg,

    #[arg(long, value_enum, default_value = "standard")]
    weights: WeightsArg,

    /// Evaluation cache slots, 0 disables the cache
    #[arg(long, default_value_t = DEFAULT_CACHE_SLOTS)]
    cache_capacity: usize,

    /// Searches slower than this are logged as overtime
    #[arg(long, default_value_t = 2000)]
    time_budget_ms: u64,

    /// Play this colour instead of reading the designator line
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_depth(self.depth)
            .with_max_choices(self.max_choices)
            .with_recursion(self.recursion.into())
            .with_opening(self.opening.into())
            .with_weights(self.weights.into())
            .with_cache_slots(self.cache_capacity)
            .with_time_budget(Duration::from_millis(self.time_budget_ms))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    config.validate().context("invalid engine configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(config, cli.color.map(Color::from), stdin.lock(), stdout.lock())
        .context("protocol session failed")?;

    Ok(())
}
