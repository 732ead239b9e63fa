use platnav::{
    BuildError, Cell, NavConfig, Navigator, NodeFlags, NodeId, PlatformNav, TileMap, Vec2,
};

fn build(text: &str) -> PlatformNav {
    let map = TileMap::from_ascii(text, 16.0).expect("level should parse");
    PlatformNav::build(&map, NavConfig::default()).expect("build should succeed")
}

fn id_at(nav: &PlatformNav, cell: Cell) -> NodeId {
    nav.nodes()
        .iter()
        .find(|n| n.cell == cell)
        .map(|n| n.id)
        .expect("expected a node at cell")
}

#[test]
fn raised_platforms_within_jump_distance_connect() {
    // Two single-tile platforms three cells apart: the left one's right edge
    // jumps to the right one's left edge, both ways.
    let nav = build(
        "......\n\
         .#..#.",
    );

    let left = id_at(&nav, Cell::new(1, 0));
    let right = id_at(&nav, Cell::new(4, 0));
    assert!(nav.graph().has_edge(left, right));
    assert!(nav.graph().has_edge(right, left));

    let path = nav.path(Vec2::new(24.0, 8.0), Vec2::new(72.0, 8.0));
    assert!(!path.is_empty());
    assert_eq!(path.first().unwrap().position, Vec2::new(24.0, 8.0));
    assert_eq!(path.last().unwrap().position, Vec2::new(72.0, 8.0));
}

#[test]
fn platforms_beyond_jump_distance_stay_disconnected() {
    let nav = build(
        "........................\n\
         .###................###.",
    );

    // Each island anchors its own extremities, but nothing crosses the gap,
    // so queries across it come back empty.
    let from = Vec2::new(2.5 * 16.0, 8.0);
    let to = Vec2::new(22.5 * 16.0, 8.0);
    assert!(nav.path(from, to).is_empty());
    assert!(nav.find_path(from, to).is_none());
}

#[test]
fn flat_platform_interior_emits_no_nodes() {
    // Only the extremities of a gap-free platform are anchored; interior
    // surface tiles have solid neighbors on both sides and produce nothing.
    // Floor-walking between interior points is the consumer's job, not this
    // graph's: the only edge is the end-to-end anchor connection.
    let nav = build("##########");

    assert_eq!(nav.nodes().len(), 2);
    let left = id_at(&nav, Cell::new(0, -1));
    let right = id_at(&nav, Cell::new(9, -1));
    assert!(nav.graph().has_edge(left, right));
    assert_eq!(nav.graph().edge_count(), 2);
}

#[test]
fn blocked_or_unsupported_span_rejects_horizontal_connector() {
    // The leftmost node and the far right edge share a row and carry
    // qualifying flags, but the span between them crosses a solid cell and an
    // unsupported hole, so the nearest-horizontal rule must refuse them.
    let nav = build(
        ".#....\n\
         ##.###",
    );

    let source = id_at(&nav, Cell::new(0, 0));
    let target = id_at(&nav, Cell::new(5, 0));
    assert!(nav
        .nodes()
        .iter()
        .any(|n| n.id == source && n.flags.contains(NodeFlags::LEFT_EDGE)));
    assert!(nav
        .nodes()
        .iter()
        .any(|n| n.id == target && n.flags.contains(NodeFlags::RIGHT_EDGE)));
    assert!(!nav.graph().has_edge(source, target));
    assert!(!nav.graph().has_edge(target, source));

    // Control: the clear stretch right of the hole does connect.
    let ledge = id_at(&nav, Cell::new(3, 0));
    assert!(nav.graph().has_edge(ledge, target));
}

#[test]
fn short_drop_connects_both_ways() {
    let nav = build(
        "......\n\
         .##...\n\
         ......\n\
         ......\n\
         ######",
    );

    let top = id_at(&nav, Cell::new(1, 0));
    let landing = id_at(&nav, Cell::new(0, 3));
    assert!(nav.graph().has_edge(top, landing));
    assert!(nav.graph().has_edge(landing, top));
}

#[test]
fn long_drop_is_one_way() {
    let nav = build(
        "......\n\
         .##...\n\
         ......\n\
         ......\n\
         ......\n\
         ......\n\
         ......\n\
         ......\n\
         ######",
    );

    let top = id_at(&nav, Cell::new(1, 0));
    let landing = id_at(&nav, Cell::new(0, 7));
    assert!(nav.graph().has_edge(top, landing));
    assert!(!nav.graph().has_edge(landing, top));

    // Dropping down works; climbing back up must not reuse the one-way edge.
    let top_pos = Vec2::new(24.0, 8.0);
    let floor_pos = Vec2::new(8.0, 7.0 * 16.0 + 8.0);
    assert!(!nav.path(top_pos, floor_pos).is_empty());
    assert!(nav.path(floor_pos, top_pos).is_empty());
}

#[test]
fn path_to_same_node_position_is_a_single_point() {
    let nav = build("##########");

    let p = Vec2::new(8.0, -8.0); // exactly the left anchor node
    let path = nav.path(p, p);
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].position, p);
    assert!(path[0].flags.contains(NodeFlags::POSITION_POINT));
}

#[test]
fn literal_start_replaces_a_backtracking_first_node() {
    let nav = build("##########");
    let left = Vec2::new(8.0, -8.0);
    let right = Vec2::new(152.0, -8.0);

    // Start two-thirds along the platform: walking back to the left anchor
    // first would be a detour, so the literal start leads the output.
    let from = Vec2::new(60.0, -8.0);
    let path = nav.path(from, right);

    assert_eq!(path.first().unwrap().position, from);
    assert!(path.first().unwrap().flags.contains(NodeFlags::POSITION_POINT));
    assert!(path.iter().all(|p| p.position != left));
}

#[test]
fn backtracking_last_node_is_dropped() {
    let nav = build("##########");
    let left = Vec2::new(8.0, -8.0);
    let right = Vec2::new(152.0, -8.0);

    let to = Vec2::new(100.0, -8.0);
    let path = nav.path(left, to);

    assert_eq!(path.first().unwrap().position, left);
    assert_eq!(path.last().unwrap().position, to);
    assert!(path.iter().all(|p| p.position != right));
}

#[test]
fn empty_grid_yields_empty_queries() {
    let map = TileMap::new(16.0);
    let nav = PlatformNav::build(&map, NavConfig::default()).expect("empty grid is not an error");

    assert_eq!(nav.nodes().len(), 0);
    assert!(nav.path(Vec2::ZERO, Vec2::new(100.0, 0.0)).is_empty());
    assert!(nav.nearest_node(Vec2::ZERO).is_none());
}

#[test]
fn build_rejects_invalid_config() {
    let map = TileMap::new(16.0);

    let bad_distance = NavConfig {
        jump_distance: 0,
        ..NavConfig::default()
    };
    assert_eq!(
        PlatformNav::build(&map, bad_distance).unwrap_err(),
        BuildError::InvalidJumpDistance(0)
    );

    let bad_height = NavConfig {
        jump_height: -1,
        ..NavConfig::default()
    };
    assert_eq!(
        PlatformNav::build(&map, bad_height).unwrap_err(),
        BuildError::InvalidJumpHeight(-1)
    );
}

#[test]
fn navigator_trait_mirrors_the_facade() {
    let nav = build(
        "......\n\
         .#..#.",
    );

    let from = Vec2::new(24.0, 8.0);
    let to = Vec2::new(72.0, 8.0);

    let path = nav.find_path(from, to).expect("path should exist");
    assert_eq!(path.points.first().copied(), Some(from));
    assert_eq!(path.points.last().copied(), Some(to));

    let projected = nav.nearest_point(Vec2::new(30.0, 0.0)).unwrap();
    assert_eq!(projected, Vec2::new(24.0, 8.0));
}

#[test]
fn queries_are_deterministic_for_same_input() {
    let text = "......\n\
                .##...\n\
                ......\n\
                ......\n\
                ######";
    let a = build(text);
    let b = build(text);

    let from = Vec2::new(24.0, 8.0);
    let to = Vec2::new(8.0, 3.0 * 16.0 + 8.0);
    assert_eq!(a.path(from, to), b.path(from, to));
}
