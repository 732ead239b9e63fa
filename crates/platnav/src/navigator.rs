use crate::{node::NodeFlags, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One hop of a resolved path: where to go, and what kind of node it was.
///
/// Consumers branch on the flags (e.g. jump when the next hop is an edge on a
/// higher row, just walk toward a wall anchor). Synthetic query endpoints
/// carry only `POSITION_POINT`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathPoint {
    pub position: Vec2,
    pub flags: NodeFlags,
}

impl PathPoint {
    /// A transient endpoint for a literal query position.
    pub fn position_point(position: Vec2) -> Self {
        Self {
            position,
            flags: NodeFlags::POSITION_POINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    pub points: Vec<Vec2>,
}

impl NavPath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}

pub trait Navigator {
    /// Forward-ordered positions from `start` to `goal`, or `None` when either
    /// endpoint resolves to no node or the graph offers no route.
    fn find_path(&self, start: Vec2, goal: Vec2) -> Option<NavPath>;

    /// Project a point onto the nearest navigable position.
    ///
    /// Backends that don't support projection may return `None`.
    fn nearest_point(&self, _point: Vec2) -> Option<Vec2> {
        None
    }
}
