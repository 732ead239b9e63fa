//! Reachability rules: wires classified nodes into the traversal graph.

use std::collections::HashMap;

use crate::{
    classify,
    config::NavConfig,
    graph::PointGraph,
    node::{NavNode, NodeFlags, NodeId},
    tile::{Cell, TileGrid},
};

/// Evaluate every connection rule with each node as the source.
///
/// Rules are independent and idempotent, so evaluation order only affects
/// edge insertion order, not the resulting edge set.
pub fn connect<G: TileGrid>(grid: &G, config: &NavConfig, graph: &mut PointGraph) {
    let by_cell: HashMap<Cell, NodeId> = graph.nodes().iter().map(|n| (n.cell, n.id)).collect();

    for i in 0..graph.node_count() {
        let p1 = *graph.node(NodeId(i as u32));
        connect_nearest_horizontal(grid, p1, graph);
        connect_jumps(config, p1, graph);
        connect_fall(grid, config, p1, &by_cell, graph);
    }
}

/// Connect a left-anchored node to the nearest right-anchored node on the
/// same row, provided the span between them is walkable.
fn connect_nearest_horizontal<G: TileGrid>(grid: &G, p1: NavNode, graph: &mut PointGraph) {
    let source = NodeFlags::LEFT_EDGE | NodeFlags::LEFT_WALL | NodeFlags::FALL;
    let target = NodeFlags::RIGHT_EDGE | NodeFlags::RIGHT_WALL | NodeFlags::FALL;

    if !p1.flags.intersects(source) {
        return;
    }

    let mut closest: Option<NavNode> = None;
    for p2 in graph.nodes() {
        if p2.id == p1.id || !p2.flags.intersects(target) {
            continue;
        }
        if p2.cell.y != p1.cell.y || p2.cell.x <= p1.cell.x {
            continue;
        }
        match closest {
            None => closest = Some(*p2),
            Some(c) if p2.cell.x < c.cell.x => closest = Some(*p2),
            _ => {}
        }
    }

    let Some(p2) = closest else { return };
    if span_is_blocked(grid, p1.cell, p2.cell) {
        return;
    }
    graph.connect(p1.id, p2.id, true);
}

/// A horizontal run is unusable if any column in `[from.x, to.x)` has a solid
/// cell at the node row or nothing to stand on underneath.
fn span_is_blocked<G: TileGrid>(grid: &G, from: Cell, to: Cell) -> bool {
    for x in from.x..to.x {
        let cell = Cell::new(x, from.y);
        if grid.is_solid(cell) || !grid.is_solid(cell.below()) {
            return true;
        }
    }
    false
}

fn connect_jumps(config: &NavConfig, p1: NavNode, graph: &mut PointGraph) {
    for j in 0..graph.node_count() {
        let p2 = *graph.node(NodeId(j as u32));
        horizontal_platform_jump(config, p1, p2, graph);
        diagonal_jump_right_to_left(config, p1, p2, graph);
        diagonal_jump_left_to_right(config, p1, p2, graph);
    }
}

/// Same-height gap between a right edge and a left edge further right.
fn horizontal_platform_jump(config: &NavConfig, p1: NavNode, p2: NavNode, graph: &mut PointGraph) {
    if p1.id == p2.id {
        return;
    }
    if p2.cell.y == p1.cell.y
        && p1.flags.contains(NodeFlags::RIGHT_EDGE)
        && p2.flags.contains(NodeFlags::LEFT_EDGE)
        && p2.cell.x > p1.cell.x
        && p1.cell.distance(p2.cell) < (config.jump_distance + 1) as f32
    {
        graph.connect(p1.id, p2.id, true);
    }
}

/// Right edge down to a left edge below and to the right.
fn diagonal_jump_right_to_left(config: &NavConfig, p1: NavNode, p2: NavNode, graph: &mut PointGraph) {
    if p1.flags.contains(NodeFlags::RIGHT_EDGE)
        && p2.flags.contains(NodeFlags::LEFT_EDGE)
        && p2.cell.x > p1.cell.x
        && p2.cell.y > p1.cell.y
        && p1.cell.distance(p2.cell) < config.jump_distance as f32
    {
        graph.connect(p1.id, p2.id, true);
    }
}

/// Left edge down to a right edge below and to the left.
fn diagonal_jump_left_to_right(config: &NavConfig, p1: NavNode, p2: NavNode, graph: &mut PointGraph) {
    if p1.flags.contains(NodeFlags::LEFT_EDGE)
        && p2.flags.contains(NodeFlags::RIGHT_EDGE)
        && p2.cell.x < p1.cell.x
        && p2.cell.y > p1.cell.y
        && p1.cell.distance(p2.cell) < config.jump_distance as f32
    {
        graph.connect(p1.id, p2.id, true);
    }
}

/// Drop from an edge to the landing node found by the descent scan. Short
/// drops stay climbable both ways; anything past `jump_height` rows becomes a
/// one-way edge.
fn connect_fall<G: TileGrid>(
    grid: &G,
    config: &NavConfig,
    p1: NavNode,
    by_cell: &HashMap<Cell, NodeId>,
    graph: &mut PointGraph,
) {
    if !p1.flags.intersects(NodeFlags::LEFT_EDGE | NodeFlags::RIGHT_EDGE) {
        return;
    }

    let flags_at = |c: Cell| by_cell.get(&c).map(|&id| graph.node(id).flags);
    let Some(fall) = classify::find_fall_point(grid, p1.cell.below(), flags_at) else {
        return;
    };
    let Some(&landing) = by_cell.get(&fall) else {
        return;
    };

    let p2 = *graph.node(landing);
    let drop = p2.cell.y - p1.cell.y;
    graph.connect(p1.id, p2.id, drop <= config.jump_height);
}
