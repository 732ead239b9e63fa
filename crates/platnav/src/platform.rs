//! The platformer navigation backend: build once, query endlessly.

use crate::{
    classify, connect,
    config::NavConfig,
    error::BuildError,
    graph::PointGraph,
    navigator::{NavPath, Navigator, PathPoint},
    node::{NavNode, NodeId},
    tile::TileGrid,
    Vec2,
};

/// Navigation graph for one tile layer.
///
/// Built synchronously at level initialization; immutable afterwards, so
/// queries take `&self` and are safe to issue from any number of callers.
#[derive(Debug, Clone)]
pub struct PlatformNav {
    graph: PointGraph,
    config: NavConfig,
}

impl PlatformNav {
    /// Classify the grid's surface tiles and run the reachability rules.
    ///
    /// Fails fast on invalid configuration; a grid with no solid cells is not
    /// an error, it just yields a graph every query answers with "no path".
    pub fn build<G: TileGrid>(grid: &G, config: NavConfig) -> Result<Self, BuildError> {
        config.validate()?;

        let mut graph = PointGraph::new();
        for node in classify::classify(grid) {
            graph.add_node(node.cell, node.position, node.flags);
        }
        connect::connect(grid, &config, &mut graph);

        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn graph(&self) -> &PointGraph {
        &self.graph
    }

    pub fn nodes(&self) -> &[NavNode] {
        self.graph.nodes()
    }

    /// Graph node closest to `position`, if any node exists.
    pub fn nearest_node(&self, position: Vec2) -> Option<NodeId> {
        self.graph.nearest(position)
    }

    /// Shortest path between two world positions, with endpoint correction.
    ///
    /// The raw node path starts and ends on graph nodes; the first and last
    /// output points are adjusted so the sequence reflects the literal query
    /// positions without backtracking:
    ///
    /// - if the literal start is closer to the second path node than the
    ///   first node is, the literal start replaces the first node;
    /// - if the literal end is closer to the second-to-last node than the
    ///   last node is, the last node is dropped;
    /// - the literal end is always the final point.
    ///
    /// An empty result means no node was near an endpoint or the regions are
    /// disconnected; callers treat it as "hold position".
    pub fn path(&self, from: Vec2, to: Vec2) -> Vec<PathPoint> {
        let (Some(start_id), Some(end_id)) = (self.graph.nearest(from), self.graph.nearest(to))
        else {
            return Vec::new();
        };

        let Some(ids) = self.graph.id_path(start_id, end_id) else {
            return Vec::new();
        };
        if ids.is_empty() {
            return Vec::new();
        }

        let end_point = PathPoint::position_point(to);
        let count = ids.len();
        let mut out = Vec::with_capacity(count + 1);

        for (i, &id) in ids.iter().enumerate() {
            let node = self.graph.node(id);

            // A single-node path collapses to the literal destination.
            if count == 1 {
                continue;
            }

            if i == 0 {
                let second = self.graph.node(ids[1]);
                if from.distance(second.position) < node.position.distance(second.position) {
                    out.push(PathPoint::position_point(from));
                    continue;
                }
            } else if i == count - 1 {
                let penultimate = self.graph.node(ids[i - 1]);
                if to.distance(penultimate.position) < node.position.distance(penultimate.position)
                {
                    // The last node would be a backtrack; the literal end
                    // replaces it below.
                    continue;
                }
                out.push(PathPoint {
                    position: node.position,
                    flags: node.flags,
                });
                break;
            }

            out.push(PathPoint {
                position: node.position,
                flags: node.flags,
            });
        }

        out.push(end_point);
        out
    }
}

impl Navigator for PlatformNav {
    fn find_path(&self, start: Vec2, goal: Vec2) -> Option<NavPath> {
        let points = self.path(start, goal);
        if points.is_empty() {
            return None;
        }
        Some(NavPath::new(points.into_iter().map(|p| p.position).collect()))
    }

    fn nearest_point(&self, point: Vec2) -> Option<Vec2> {
        self.graph
            .nearest(point)
            .map(|id| self.graph.node(id).position)
    }
}
