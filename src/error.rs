//! Errors raised by the desk, the robot and the command grammar.
//!
//! The `Display` text of each variant is the exact body shown to the user; the
//! session wraps it in a blank-line delimited block.

use thiserror::Error;

/// Every recoverable failure of the simulator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// Desk dimensions are malformed or not strictly positive.
    #[error("Dimensions Error:\n\tOnly positive integers in the `X,Y` format are allowed!")]
    Dimensions,

    /// A placement line does not follow `PLACE X,Y,F`.
    #[error(
        "Format Error:\n\tEither the PLACE command format is not followed or arguments are of the wrong type!\nPlease note that you must set the position first (with PLACE X,Y,F)"
    )]
    Format,

    /// The requested cell lies outside the desk.
    #[error("Fall Warning:\n\tThe robot will fall with such a move!")]
    Fall,

    /// The direction token is not one of the four cardinal names.
    #[error(
        "Direction Error:\n\tThe direction entered is unknown, please use NORTH, EAST, SOUTH or WEST"
    )]
    Direction,

    /// An operating-phase line matched none of the known commands.
    #[error("Unknown command Error:\n\tPlease use only MOVE, LEFT, RIGHT, REPORT commands!")]
    UnknownCommand,

    /// Movement or rotation was requested before the robot was placed.
    #[error("Placement Error:\n\tThe robot must be placed with PLACE X,Y,F first")]
    NotPlaced,
}

pub type Result<T> = std::result::Result<T, SimulationError>;
