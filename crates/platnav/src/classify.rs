//! Surface classification: turns solid tiles into flagged navigation nodes.

use std::collections::HashMap;

use crate::{
    node::{NavNode, NodeFlags, NodeId},
    tile::{Cell, TileGrid},
};

/// Descent scans give up after this many rows and report no landing.
pub const MAX_FALL_SCAN_DEPTH: i32 = 500;

/// Deduplicating node accumulator: at most one node per cell, later flags
/// merge into the existing node.
#[derive(Debug, Default)]
struct NodeSet {
    nodes: Vec<NavNode>,
    by_cell: HashMap<Cell, usize>,
}

impl NodeSet {
    fn upsert<G: TileGrid>(&mut self, grid: &G, cell: Cell, flag: NodeFlags) {
        match self.by_cell.get(&cell) {
            Some(&i) => self.nodes[i].flags.insert(flag),
            None => {
                let id = NodeId(self.nodes.len() as u32);
                self.by_cell.insert(cell, self.nodes.len());
                self.nodes.push(NavNode {
                    id,
                    cell,
                    position: grid.cell_to_world(cell),
                    flags: flag,
                });
            }
        }
    }

    fn flags_at(&self, cell: Cell) -> Option<NodeFlags> {
        self.by_cell.get(&cell).map(|&i| self.nodes[i].flags)
    }
}

/// Classify every solid tile of `grid` into navigation nodes.
///
/// Only surface tiles qualify: a tile with another solid tile directly above
/// it is interior and emits nothing. Node ids are assigned sequentially in
/// the grid's `solid_cells` order, so the result is deterministic for a given
/// layout.
pub fn classify<G: TileGrid>(grid: &G) -> Vec<NavNode> {
    let mut set = NodeSet::default();

    for tile in grid.solid_cells() {
        add_left_edge(grid, tile, &mut set);
        add_right_edge(grid, tile, &mut set);
        add_left_wall(grid, tile, &mut set);
        add_right_wall(grid, tile, &mut set);
        add_fall_point(grid, tile, &mut set);
    }

    set.nodes
}

fn is_surface<G: TileGrid>(grid: &G, tile: Cell) -> bool {
    !grid.is_solid(tile.above())
}

fn add_left_edge<G: TileGrid>(grid: &G, tile: Cell, set: &mut NodeSet) {
    if !is_surface(grid, tile) || grid.is_solid(tile.left()) {
        return;
    }
    set.upsert(grid, tile.above(), NodeFlags::LEFT_EDGE);
}

fn add_right_edge<G: TileGrid>(grid: &G, tile: Cell, set: &mut NodeSet) {
    if !is_surface(grid, tile) || grid.is_solid(tile.right()) {
        return;
    }
    set.upsert(grid, tile.above(), NodeFlags::RIGHT_EDGE);
}

fn add_left_wall<G: TileGrid>(grid: &G, tile: Cell, set: &mut NodeSet) {
    if !is_surface(grid, tile) || !grid.is_solid(tile.above().left()) {
        return;
    }
    set.upsert(grid, tile.above(), NodeFlags::LEFT_WALL);
}

fn add_right_wall<G: TileGrid>(grid: &G, tile: Cell, set: &mut NodeSet) {
    if !is_surface(grid, tile) || !grid.is_solid(tile.above().right()) {
        return;
    }
    set.upsert(grid, tile.above(), NodeFlags::RIGHT_WALL);
}

fn add_fall_point<G: TileGrid>(grid: &G, tile: Cell, set: &mut NodeSet) {
    let Some(fall) = find_fall_point(grid, tile, |c| set.flags_at(c)) else {
        return;
    };
    set.upsert(grid, fall, NodeFlags::FALL);
}

/// Find the landing cell for a drop off the edge above `ground`.
///
/// `flags_at` resolves the node (if any) at a cell; the scan only runs when
/// the cell above `ground` holds an edge node. The scan column sits one cell
/// past the edge (left for LEFT_EDGE, right for RIGHT_EDGE; left wins when a
/// node is both) and descends from the node's row until the cell below the
/// scan cell is solid. Pure; returns `None` once `MAX_FALL_SCAN_DEPTH` rows
/// are exhausted, which is a normal negative result.
pub fn find_fall_point<G: TileGrid>(
    grid: &G,
    ground: Cell,
    flags_at: impl Fn(Cell) -> Option<NodeFlags>,
) -> Option<Cell> {
    let node_cell = ground.above();
    let flags = flags_at(node_cell)?;

    let mut scan = if flags.contains(NodeFlags::LEFT_EDGE) {
        node_cell.left()
    } else if flags.contains(NodeFlags::RIGHT_EDGE) {
        node_cell.right()
    } else {
        return None;
    };

    for _ in 0..MAX_FALL_SCAN_DEPTH {
        if grid.is_solid(scan.below()) {
            return Some(scan);
        }
        scan = scan.below();
    }
    None
}
