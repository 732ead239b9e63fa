//! Tile-grid navigation for 2D platformers.
//!
//! Builds a traversability graph from a tile layout (platform edges, wall
//! faces, fall landings), connects it with jump/fall reachability rules, and
//! answers endpoint-corrected path queries between arbitrary world positions.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod classify;
pub mod config;
pub mod connect;
pub mod error;
pub mod graph;
pub mod math;
pub mod navigator;
pub mod node;
pub mod platform;
pub mod tile;

pub use actions::PathFollower;
pub use config::NavConfig;
pub use error::{BuildError, LevelError};
pub use graph::{PointGraph, PointGraphQuery};
pub use math::Vec2;
pub use navigator::{NavPath, Navigator, PathPoint};
pub use node::{NavNode, NodeFlags, NodeId};
pub use platform::PlatformNav;
pub use tile::{Cell, TileGrid, TileMap};
