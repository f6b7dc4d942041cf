//! Line-oriented driver protocol
//!
//! A session starts with a colour designator line (`w` for White, anything
//! else for Black), answered with `ok`. After that the driver sends:
//!
//! - `get move`: the engine replies with its move, e.g. `d3`, or `pass`
//! - `move <colour> <square>`: a move played by either side
//! - `done`: end of session
//!
//! Every other line is ignored. Replies go to the output stream only; all
//! diagnostics go through `tracing`.
//!
//! ```
//! use anti_othello::config::EngineConfig;
//! use anti_othello::protocol::run_session;
//!
//! let input = "b\nget move\ndone\n";
//! let mut output = Vec::new();
//! run_session(EngineConfig::default(), None, input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "ok\nd3\n");
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::board::{Color, Pos};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{GameError, GameResult};
use crate::notation::parse_square;

/// Handshake reply to the colour designator
pub const READY_REPLY: &str = "ok";

/// One parsed driver line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetMove,
    Move { color: Color, pos: Pos },
    Done,
    /// Anything the protocol does not define
    Ignored,
}

impl Command {
    /// Parse a driver line. Only a `move` line can fail.
    pub fn parse(line: &str) -> GameResult<Command> {
        let line = line.trim();
        let mut words = line.split_ascii_whitespace();

        match words.next() {
            Some("done") if line == "done" => Ok(Command::Done),
            Some("get") if words.next() == Some("move") && words.next().is_none() => {
                Ok(Command::GetMove)
            }
            Some("move") => match (words.next(), words.next(), words.next()) {
                (Some(color), Some(square), None) => Ok(Command::Move {
                    color: Color::from_initial(color),
                    pos: parse_square(square)?,
                }),
                _ => Err(GameError::MalformedCommand {
                    line: line.to_string(),
                }),
            },
            _ => Ok(Command::Ignored),
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: u32,
    pub moves_applied: u32,
    pub passes: u32,
    pub ignored: u32,
}

/// Whether the session continues after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// A running protocol session over arbitrary line streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    engine: Engine,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Perform the handshake.
    ///
    /// With `color == None` the first input line is read as the designator;
    /// otherwise no line is consumed. Either way `ok` is written.
    pub fn start(
        config: EngineConfig,
        color: Option<Color>,
        mut input: R,
        mut output: W,
    ) -> GameResult<Self> {
        let color = match color {
            Some(color) => color,
            None => {
                let mut buf = Vec::new();
                let designator = read_text_line(&mut input, &mut buf)?.unwrap_or_default();
                Color::from_designator(&designator)
            }
        };

        let engine = Engine::with_config(color, config)?;
        info!(%color, "session started");

        writeln!(output, "{READY_REPLY}")?;
        output.flush()?;

        Ok(Self {
            input,
            output,
            engine,
            summary: SessionSummary::default(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Handle lines until `done` or end of input.
    pub fn run(&mut self) -> GameResult<SessionSummary> {
        let mut buf = Vec::new();
        while let Some(line) = read_text_line(&mut self.input, &mut buf)? {
            if self.step(&line)? == Flow::Stop {
                break;
            }
        }

        let summary = self.summary;
        info!(
            requests = summary.requests,
            moves = summary.moves_applied,
            passes = summary.passes,
            ignored = summary.ignored,
            "session finished"
        );
        Ok(summary)
    }

    /// Handle a single driver line.
    ///
    /// Malformed `move` lines are logged and skipped; only stream failures
    /// are returned as errors.
    pub fn step(&mut self, line: &str) -> GameResult<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "skipping malformed line");
                self.summary.ignored += 1;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::GetMove => {
                self.summary.requests += 1;
                let result = self.engine.get_move_with_stats();
                if result.best_move().is_none() {
                    self.summary.passes += 1;
                }
                writeln!(self.output, "{}", result.reply())?;
                self.output.flush()?;
            }
            Command::Move { color, pos } => {
                debug!(%color, %pos, "move received");
                self.engine.apply_move(color, pos);
                self.summary.moves_applied += 1;
            }
            Command::Done => return Ok(Flow::Stop),
            Command::Ignored => {
                debug!(line = line.trim_end(), "ignored line");
                self.summary.ignored += 1;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Read one line, or `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line is simply a line no command matches.
fn read_text_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> GameResult<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        debug!("end of input");
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Run a whole session: handshake, then lines until `done` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    config: EngineConfig,
    color: Option<Color>,
    input: R,
    output: W,
) -> GameResult<SessionSummary> {
    Session::start(config, color, input, output)?.run()
}
