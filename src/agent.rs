//! Robot state and operations on a desk.

use crate::error::{Result, SimulationError};
use crate::grid::Grid;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::debug;

/// Cardinal heading of the robot.
///
/// The variants are declared in clockwise order; `turn_right` walks forward
/// through that cycle and `turn_left` walks backward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading after a quarter turn counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Heading after a quarter turn clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit offset of one step forward. North is `+Y`, east is `+X`.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    /// Upper-case name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(SimulationError::Direction)
    }
}

/// Serializable snapshot of a placed robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub direction: Direction,
}

/// Everything that becomes known once the robot is placed.
#[derive(Clone, Copy, Debug)]
struct Placement<'g> {
    grid: &'g Grid,
    position: IVec2,
    direction: Direction,
}

impl<'g> Placement<'g> {
    fn validated(grid: &'g Grid, position: IVec2, direction: Direction) -> Result<Self> {
        if !grid.contains(position) {
            return Err(SimulationError::Fall);
        }
        Ok(Self {
            grid,
            position,
            direction,
        })
    }
}

/// The robot.
///
/// Starts unset and becomes placed through [`Agent::place`]. It borrows the
/// [`Grid`] it stands on rather than owning it. Every operation computes its
/// candidate state in full and assigns it only after validation, so a failed
/// call never leaves a partial update behind.
#[derive(Clone, Debug, Default)]
pub struct Agent<'g> {
    placement: Option<Placement<'g>>,
}

impl<'g> Agent<'g> {
    /// Creates an unset robot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the robot on `grid` at `(x, y)` facing `direction`.
    ///
    /// The direction is checked before the coordinates, so a bad heading wins
    /// over an off-desk cell.
    pub fn place(&mut self, grid: &'g Grid, x: i32, y: i32, direction: &str) -> Result<()> {
        let direction: Direction = direction.parse()?;
        self.place_facing(grid, IVec2::new(x, y), direction)
    }

    /// Typed variant of [`place`](Self::place).
    pub fn place_facing(
        &mut self,
        grid: &'g Grid,
        position: IVec2,
        direction: Direction,
    ) -> Result<()> {
        let placement = Placement::validated(grid, position, direction)?;
        self.placement = Some(placement);
        debug!(x = position.x, y = position.y, %direction, "robot placed");
        Ok(())
    }

    /// Steps one cell forward. Refuses, without moving, if that would leave the desk.
    pub fn move_forward(&mut self) -> Result<()> {
        let current = self.placement.ok_or(SimulationError::NotPlaced)?;
        let next = Placement::validated(
            current.grid,
            current.position.wrapping_add(current.direction.step()),
            current.direction,
        )?;
        self.placement = Some(next);
        debug!(x = next.position.x, y = next.position.y, "robot moved");
        Ok(())
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(&mut self) -> Result<()> {
        self.rotate(Direction::turn_left)
    }

    /// Quarter turn clockwise.
    pub fn turn_right(&mut self) -> Result<()> {
        self.rotate(Direction::turn_right)
    }

    fn rotate(&mut self, turn: fn(Direction) -> Direction) -> Result<()> {
        let placement = self.placement.as_mut().ok_or(SimulationError::NotPlaced)?;
        placement.direction = turn(placement.direction);
        debug!(direction = %placement.direction, "robot turned");
        Ok(())
    }

    /// Writes the robot's coordinates and heading to `out`.
    pub fn report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self.placement {
            Some(p) => writeln!(
                out,
                "Robot's coordinates are {}, {} and it looks {}",
                p.position.x, p.position.y, p.direction
            ),
            None => writeln!(out, "Robot has not been placed on the desk yet"),
        }
    }

    /// Returns true once a placement has succeeded.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// The desk the robot stands on, if placed.
    pub fn grid(&self) -> Option<&'g Grid> {
        self.placement.map(|p| p.grid)
    }

    /// Current cell, if placed.
    pub fn position(&self) -> Option<IVec2> {
        self.placement.map(|p| p.position)
    }

    /// Current heading, if placed.
    pub fn direction(&self) -> Option<Direction> {
        self.placement.map(|p| p.direction)
    }

    /// Snapshot of position and heading, if placed.
    pub fn pose(&self) -> Option<Pose> {
        self.placement.map(|p| Pose {
            position: p.position,
            direction: p.direction,
        })
    }
}
