//! The desk the robot walks on.

use crate::error::{Result, SimulationError};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Raw dimensions as they appear on the wire, before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub length: i32,
    pub width: i32,
}

/// Immutable rectangular bounds of the desk.
///
/// Valid cells run from `(0, 0)` to `(length, width)` inclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridDimensions", into = "GridDimensions")]
pub struct Grid {
    length: i32,
    width: i32,
}

impl Grid {
    /// Builds a desk, rejecting any dimension below 1.
    pub fn new(length: i32, width: i32) -> Result<Self> {
        if length < 1 || width < 1 {
            return Err(SimulationError::Dimensions);
        }
        Ok(Self { length, width })
    }

    /// Extent along the X axis.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Extent along the Y axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns true if `cell` lies on the desk.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(IVec2::new(self.length, self.width)).all()
    }
}

impl TryFrom<GridDimensions> for Grid {
    type Error = SimulationError;

    fn try_from(raw: GridDimensions) -> Result<Self> {
        Grid::new(raw.length, raw.width)
    }
}

impl From<Grid> for GridDimensions {
    fn from(grid: Grid) -> Self {
        Self {
            length: grid.length,
            width: grid.width,
        }
    }
}
