use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    node::{NavNode, NodeFlags, NodeId},
    tile::Cell,
    Vec2,
};

/// Fixed-point scale for edge costs and heuristics.
const COST_SCALE: f32 = 1024.0;

fn quant(d: f32) -> u32 {
    (d.max(0.0) * COST_SCALE) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    g: u32,
    node: usize,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, usize, u64) {
        (self.f, self.g, self.node, self.tie)
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    cost: u32,
}

/// Reusable scratch buffers for `PointGraph` queries.
///
/// This avoids per-query allocations when many agents plan every frame.
#[derive(Debug, Default)]
pub struct PointGraphQuery {
    open: BinaryHeap<OpenNode>,
    g_score: Vec<u32>,
    came_from: Vec<Option<usize>>,
}

/// Weighted graph over navigation nodes with explicit edge direction.
///
/// Edge weight is the Euclidean distance between the endpoints' cell
/// coordinates. An undirected connection is stored as two directed entries; a
/// one-way connection stores only the forward entry and is never traversable
/// in reverse.
#[derive(Debug, Clone, Default)]
pub struct PointGraph {
    nodes: Vec<NavNode>,
    edges: Vec<Vec<Edge>>,
}

impl PointGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id. Ids are assigned sequentially.
    pub fn add_node(&mut self, cell: Cell, position: Vec2, flags: NodeFlags) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NavNode {
            id,
            cell,
            position,
            flags,
        });
        self.edges.push(Vec::new());
        id
    }

    pub fn node(&self, id: NodeId) -> &NavNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed adjacency entries (an undirected connection counts
    /// twice).
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Connect `a` to `b`. Repeated connections are idempotent; directions
    /// accumulate, so a later undirected connect upgrades a one-way edge.
    pub fn connect(&mut self, a: NodeId, b: NodeId, bidirectional: bool) {
        self.add_edge(a.index(), b.index());
        if bidirectional {
            self.add_edge(b.index(), a.index());
        }
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        if self.edges[from].iter().any(|e| e.to == to) {
            return;
        }
        let cost = quant(self.nodes[from].cell.distance(self.nodes[to].cell)).saturating_add(1);
        self.edges[from].push(Edge { to, cost });
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges[from.index()].iter().any(|e| e.to == to.index())
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges[id.index()].iter().map(|e| NodeId(e.to as u32))
    }

    /// Node closest to `position` by Euclidean world distance. Ties keep the
    /// lowest id.
    pub fn nearest(&self, position: Vec2) -> Option<NodeId> {
        let mut best: Option<(f32, usize)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = position.distance(node.position);
            match best {
                None => best = Some((d, i)),
                Some((best_d, _)) if d < best_d => best = Some((d, i)),
                _ => {}
            }
        }
        best.map(|(_, i)| NodeId(i as u32))
    }

    /// Shortest path between two node ids using A*.
    ///
    /// Returns the full id sequence including both endpoints, `Some([from])`
    /// when `from == to`, or `None` when no path exists.
    pub fn id_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let mut query = PointGraphQuery::default();
        let mut out = Vec::new();
        self.id_path_into(from, to, &mut query, &mut out)?;
        Some(out)
    }

    pub fn id_path_into(
        &self,
        from: NodeId,
        to: NodeId,
        query: &mut PointGraphQuery,
        out: &mut Vec<NodeId>,
    ) -> Option<()> {
        out.clear();

        let start = from.index();
        let goal = to.index();
        if start >= self.nodes.len() || goal >= self.nodes.len() {
            return None;
        }
        if start == goal {
            out.push(from);
            return Some(());
        }

        let goal_cell = self.nodes[goal].cell;
        let heuristic = |i: usize| -> u32 { quant(self.nodes[i].cell.distance(goal_cell)) };

        let n = self.nodes.len();
        let (open, g_score, came_from) = (
            &mut query.open,
            &mut query.g_score,
            &mut query.came_from,
        );
        open.clear();
        g_score.resize(n, u32::MAX);
        g_score.fill(u32::MAX);
        came_from.resize(n, None);
        came_from.fill(None);

        g_score[start] = 0;
        open.push(OpenNode {
            f: heuristic(start),
            g: 0,
            node: start,
            tie: 0,
        });
        let mut tie: u64 = 1;

        while let Some(node) = open.pop() {
            if node.node == goal {
                out.push(NodeId(goal as u32));
                let mut current = goal;
                while let Some(prev) = came_from[current] {
                    current = prev;
                    out.push(NodeId(current as u32));
                }
                out.reverse();
                return Some(());
            }

            if node.g != g_score[node.node] {
                // Stale heap entry.
                continue;
            }

            for edge in &self.edges[node.node] {
                let tentative_g = node.g.saturating_add(edge.cost);
                if tentative_g >= g_score[edge.to] {
                    continue;
                }

                came_from[edge.to] = Some(node.node);
                g_score[edge.to] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(heuristic(edge.to)),
                    g: tentative_g,
                    node: edge.to,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }
}
