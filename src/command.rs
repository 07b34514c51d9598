//! Line grammar for the three kinds of input the simulator accepts.
//!
//! | Phase      | Accepted line                         | On mismatch       |
//! |------------|---------------------------------------|-------------------|
//! | Dimensions | empty, or `X,Y` with digits `1`-`9`   | `Dimensions`      |
//! | Placement  | `PLACE X,Y,F` (case-insensitive)      | `Format`          |
//! | Operating  | `MOVE` `LEFT` `RIGHT` `REPORT` `EXIT` | `UnknownCommand`  |

use crate::error::{Result, SimulationError};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9]+),([1-9]+)$").expect("dimensions pattern is valid"));

static PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PLACE ([0-9]+),([0-9]+),([A-Z]+)$").expect("place pattern is valid")
});

/// Strips one trailing line terminator (`\n` or `\r\n`), nothing else.
pub fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Desk size requested on the dimensions prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionsRequest {
    /// Empty line: the caller's default applies.
    Default,
    /// Explicit `length,width`.
    Explicit { length: i32, width: i32 },
}

impl FromStr for DimensionsRequest {
    type Err = SimulationError;

    fn from_str(line: &str) -> Result<Self> {
        if line.is_empty() {
            return Ok(DimensionsRequest::Default);
        }
        let caps = DIMENSIONS
            .captures(line)
            .ok_or(SimulationError::Dimensions)?;
        // Too many digits for an i32 is still a malformed size.
        let length = caps[1].parse::<i32>().map_err(|_| SimulationError::Dimensions)?;
        let width = caps[2].parse::<i32>().map_err(|_| SimulationError::Dimensions)?;
        Ok(DimensionsRequest::Explicit { length, width })
    }
}

/// A syntactically valid `PLACE X,Y,F` line.
///
/// The direction is kept as the raw upper-cased word; whether it names a real
/// heading is decided by [`Agent::place`](crate::Agent::place).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceCommand {
    pub x: i32,
    pub y: i32,
    pub direction: String,
}

impl FromStr for PlaceCommand {
    type Err = SimulationError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.to_uppercase();
        let caps = PLACE.captures(&line).ok_or(SimulationError::Format)?;
        Ok(PlaceCommand {
            x: saturating_coordinate(&caps[1]),
            y: saturating_coordinate(&caps[2]),
            direction: caps[3].to_string(),
        })
    }
}

/// Digits-only input can only fail to parse by overflowing, which is off any desk.
fn saturating_coordinate(digits: &str) -> i32 {
    digits.parse().unwrap_or(i32::MAX)
}

/// Commands accepted once the robot is on the desk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step one cell forward (`MOVE`).
    Move,
    /// Quarter turn counter-clockwise (`LEFT`).
    Left,
    /// Quarter turn clockwise (`RIGHT`).
    Right,
    /// Print position and heading (`REPORT`).
    Report,
    /// End the session (`EXIT`).
    Exit,
}

impl FromStr for Command {
    type Err = SimulationError;

    fn from_str(line: &str) -> Result<Self> {
        match line.to_uppercase().as_str() {
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Left),
            "RIGHT" => Ok(Command::Right),
            "REPORT" => Ok(Command::Report),
            "EXIT" => Ok(Command::Exit),
            _ => Err(SimulationError::UnknownCommand),
        }
    }
}
