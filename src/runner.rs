//! The frame loop. Reads engine frames line by line, hands them to an
//! `Algo`, and writes the resulting build and deploy stacks back out.
//!
//! The engine speaks newline-delimited JSON on stdin and expects two JSON
//! lines on stdout per turn. Everything else the bot wants to say goes to
//! the logger, which writes to stderr and so stays off the wire.

use std::error::Error;
use std::io::{BufRead, Write};

use time::PreciseTime;

use engine::GameState;
use engine::roles::RoleMap;
use input::json;

const TURN_FRAME: i32 = 0;
const ACTION_FRAME: i32 = 1;
const END_FRAME: i32 = 2;

/// The callbacks a bot implements. The runner owns parsing and submission,
/// so a bot only ever sees decoded state.
pub trait Algo {
    /// Called once, with the unit roles read from the configuration line.
    fn on_game_start(&mut self, roles: RoleMap);

    /// Called once per turn frame. The bot queues placements on `state`;
    /// whatever is queued when this returns is submitted. An error here
    /// aborts the game loop.
    fn on_turn(&mut self, state: &mut GameState) -> Result<(), Box<Error>>;

    /// Called for every action frame, with the raw line. Action frames are
    /// advisory, so the runner logs and discards any error from this.
    fn on_action_frame(&mut self, frame: &str) -> Result<(), Box<Error>>;
}

/// Runs `algo` against the engine until the end-of-game frame or EOF.
///
/// Configuration and turn frames must parse; a bad one poisons every later
/// decision, so their errors end the loop. Frames with an unreadable header
/// are skipped, since the engine occasionally pads the stream with lines we
/// never asked for.
pub fn run<A, R, W>(algo: &mut A, mut input: R, output: &mut W) -> Result<(), Box<Error>>
where
    A: Algo,
    R: BufRead,
    W: Write
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed without an end-of-game frame");
            return Ok(());
        }
        let frame = line.trim();
        if frame.is_empty() {
            continue;
        }

        if frame.contains("replaySave") {
            let roles = json::parse_config(frame)?;
            algo.on_game_start(roles);
        } else if frame.contains("turnInfo") {
            match json::read_frame_kind(frame) {
                Ok(TURN_FRAME) => {
                    let start_time = PreciseTime::now();
                    let mut state = json::parse_turn_frame(frame)?;
                    debug!("performing turn {}", state.turn);
                    algo.on_turn(&mut state)?;
                    state.submit_turn(output)?;
                    debug!(
                        "turn {} took {}ms",
                        state.turn,
                        start_time.to(PreciseTime::now()).num_milliseconds()
                    );
                }
                Ok(ACTION_FRAME) => {
                    if let Err(error) = algo.on_action_frame(frame) {
                        debug!("discarding malformed action frame: {}", error);
                    }
                }
                Ok(END_FRAME) => {
                    debug!("game over");
                    return Ok(());
                }
                Ok(other) => {
                    debug!("ignoring frame with unknown state type {}", other);
                }
                Err(error) => {
                    debug!("skipping frame with unreadable header: {}", error);
                }
            }
        } else {
            debug!("ignoring unrecognised line: {}", frame);
        }
    }
}
