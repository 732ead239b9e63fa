use core::fmt;

use crate::{tile::Cell, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable node identifier, assigned sequentially at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Capability bitset for a navigation node.
///
/// A node can carry several flags at once: a single-tile platform is both a
/// left and a right edge, and an edge can double as a fall landing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeFlags(u8);

impl NodeFlags {
    /// Drop-off on the node's left side.
    pub const LEFT_EDGE: NodeFlags = NodeFlags(1);
    /// Drop-off on the node's right side.
    pub const RIGHT_EDGE: NodeFlags = NodeFlags(1 << 1);
    /// Wall face rising on the left.
    pub const LEFT_WALL: NodeFlags = NodeFlags(1 << 2);
    /// Wall face rising on the right.
    pub const RIGHT_WALL: NodeFlags = NodeFlags(1 << 3);
    /// Landing reachable by dropping from an edge above.
    pub const FALL: NodeFlags = NodeFlags(1 << 4);
    /// Synthetic per-query endpoint, never persisted into the graph.
    pub const POSITION_POINT: NodeFlags = NodeFlags(1 << 5);

    pub const fn empty() -> Self {
        NodeFlags(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag in `other` is set on `self`.
    pub const fn intersects(self, other: NodeFlags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: NodeFlags) {
        self.0 |= other.0;
    }
}

impl core::ops::BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(NodeFlags, &str); 6] = [
            (NodeFlags::LEFT_EDGE, "LEFT_EDGE"),
            (NodeFlags::RIGHT_EDGE, "RIGHT_EDGE"),
            (NodeFlags::LEFT_WALL, "LEFT_WALL"),
            (NodeFlags::RIGHT_WALL, "RIGHT_WALL"),
            (NodeFlags::FALL, "FALL"),
            (NodeFlags::POSITION_POINT, "POSITION_POINT"),
        ];

        if self.is_empty() {
            return f.write_str("(empty)");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A navigable point in the open cell directly above a qualifying ground tile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavNode {
    pub id: NodeId,
    /// The open cell the node occupies (one row above its ground tile).
    pub cell: Cell,
    pub position: Vec2,
    pub flags: NodeFlags,
}
