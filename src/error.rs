use std::fmt;

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Both endpoints of a wall coincide, so it has no direction to intersect against.
    DegenerateWall { at: Point },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DegenerateWall { at } => {
                write!(f, "wall has zero length at ({}, {})", at.x, at.y)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
