//! Interactive session that drives a robot from a stream of text lines.
//!
//! The entry point is [`Session`]. Build it with a [`SimulatorConfig`], a line
//! source and a line sink, then call [`Session::run`]. A session goes through
//! two phases:
//!
//! 1. **Setup**: ask for the desk dimensions, then for a `PLACE X,Y,F` line,
//!    re-prompting after every rejected line.
//! 2. **Operating**: accept `MOVE`, `LEFT`, `RIGHT`, `REPORT` until `EXIT`.
//!
//! User mistakes never end a session; they are printed as an error block and
//! the current prompt starts over. Only `EXIT` or the end of input stop it.

use crate::agent::Agent;
use crate::command::{Command, DimensionsRequest, PlaceCommand, chomp};
use crate::error::SimulationError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Configuration for a simulation session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Desk length used when the dimensions line is left empty. Default: 5.
    pub default_length: i32,
    /// Desk width used when the dimensions line is left empty. Default: 6.
    pub default_width: i32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            default_length: 5,
            default_width: 6,
        }
    }
}

/// How a session came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed `EXIT`.
    Exited,
    /// The line source ran dry.
    InputExhausted,
}

/// One simulation run: a desk, a robot, a line source and a line sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SimulatorConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading lines from `input` and writing replies to `output`.
    pub fn new(config: SimulatorConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Prints the welcome banner and command summary.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the toy robot simulator!")?;
        writeln!(
            self.output,
            "In this program you can move your toy robot on a desk, but don't fall!\n"
        )?;
        writeln!(self.output, "The commands you should use to manipulate a robot:")?;
        writeln!(
            self.output,
            "  PLACE X,Y,F     - sets X, Y position and F direction of a robot on a desk"
        )?;
        writeln!(
            self.output,
            "                    (for direction use only NORTH, EAST, SOUTH, WEST)"
        )?;
        writeln!(self.output, "  MOVE            - moves a robot one cell ahead")?;
        writeln!(
            self.output,
            "  LEFT and RIGHT  - turn a robot 90 degrees to the left or right"
        )?;
        writeln!(
            self.output,
            "  REPORT          - report robot's position and direction"
        )?;
        writeln!(
            self.output,
            "Enter `EXIT` to exit the program after the desk and robot setup is finished\n"
        )
    }

    /// Runs both phases to completion.
    ///
    /// Only I/O failures of the source or sink are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        let Some(grid) = self.configure_grid()? else {
            return Ok(self.exhausted("dimensions"));
        };
        writeln!(
            self.output,
            "Desk with dimensions {},{} was created",
            grid.length(),
            grid.width()
        )?;
        info!(length = grid.length(), width = grid.width(), "desk created");

        let mut agent = Agent::new();
        if !self.place_agent(&grid, &mut agent)? {
            return Ok(self.exhausted("placement"));
        }
        writeln!(
            self.output,
            "Now you can move your robot on the desk with MOVE, LEFT, RIGHT"
        )?;
        writeln!(self.output, "To get robot's position, use REPORT")?;

        self.operate(&mut agent)
    }

    /// Consumes the session and hands back the line sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn configure_grid(&mut self) -> io::Result<Option<Grid>> {
        loop {
            writeln!(
                self.output,
                "Please enter the X,Y dimensions of the desk or leave empty for default dimensions (default is {},{})",
                self.config.default_length, self.config.default_width
            )?;
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };

            let built = line.parse::<DimensionsRequest>().and_then(|request| {
                let (length, width) = match request {
                    DimensionsRequest::Default => {
                        (self.config.default_length, self.config.default_width)
                    }
                    DimensionsRequest::Explicit { length, width } => (length, width),
                };
                Grid::new(length, width)
            });
            match built {
                Ok(grid) => return Ok(Some(grid)),
                Err(err) => self.show_error(err)?,
            }
        }
    }

    /// Returns `false` if input ran out before a valid placement.
    fn place_agent<'g>(&mut self, grid: &'g Grid, agent: &mut Agent<'g>) -> io::Result<bool> {
        loop {
            writeln!(
                self.output,
                "Please set position and direction for the robot on the desk"
            )?;
            let Some(line) = self.next_line()? else {
                return Ok(false);
            };

            let placed = line
                .parse::<PlaceCommand>()
                .and_then(|cmd| agent.place(grid, cmd.x, cmd.y, &cmd.direction));
            match placed {
                Ok(()) => {
                    info!(pose = ?agent.pose(), "robot on the desk");
                    return Ok(true);
                }
                Err(err) => self.show_error(err)?,
            }
        }
    }

    fn operate(&mut self, agent: &mut Agent<'_>) -> io::Result<SessionOutcome> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(self.exhausted("operating"));
            };

            match line.parse::<Command>() {
                Ok(command) => {
                    if let ControlFlow::Break(outcome) = self.execute(agent, command)? {
                        return Ok(outcome);
                    }
                }
                Err(err) => self.show_error(err)?,
            }
        }
    }

    fn execute(
        &mut self,
        agent: &mut Agent<'_>,
        command: Command,
    ) -> io::Result<ControlFlow<SessionOutcome>> {
        debug!(?command, "executing");
        let result = match command {
            Command::Move => agent.move_forward(),
            Command::Left => agent.turn_left(),
            Command::Right => agent.turn_right(),
            Command::Report => {
                agent.report(&mut self.output)?;
                Ok(())
            }
            Command::Exit => {
                info!("session ended by user");
                return Ok(ControlFlow::Break(SessionOutcome::Exited));
            }
        };
        if let Err(err) = result {
            self.show_error(err)?;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
    /// line fails the grammar like any other bad input.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(chomp(&String::from_utf8_lossy(&buf)).to_string()))
    }

    fn show_error(&mut self, err: SimulationError) -> io::Result<()> {
        debug!(?err, "rejected input");
        write!(self.output, "\n{err}\n\n")
    }

    fn exhausted(&self, phase: &str) -> SessionOutcome {
        info!(phase, "input exhausted");
        SessionOutcome::InputExhausted
    }
}
