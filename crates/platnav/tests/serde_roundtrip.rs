#![cfg(feature = "serde")]

use platnav::{NavConfig, PlatformNav, TileMap, Vec2};

#[test]
fn level_and_config_rebuild_identical_paths() {
    let map = TileMap::from_ascii(
        "......\n\
         .#..#.",
        16.0,
    )
    .expect("level should parse");
    let config = NavConfig::default();

    let map_json = serde_json::to_string(&map).expect("serialize tile map");
    let config_json = serde_json::to_string(&config).expect("serialize config");

    let map2: TileMap = serde_json::from_str(&map_json).expect("deserialize tile map");
    let config2: NavConfig = serde_json::from_str(&config_json).expect("deserialize config");
    assert_eq!(map.cell_size(), map2.cell_size());
    assert_eq!(map.len(), map2.len());

    // The graph itself is never persisted; a rebuild from the deserialized
    // level must answer queries identically.
    let nav = PlatformNav::build(&map, config).expect("build");
    let nav2 = PlatformNav::build(&map2, config2).expect("build");

    let from = Vec2::new(24.0, 8.0);
    let to = Vec2::new(72.0, 8.0);
    assert_eq!(nav.path(from, to), nav2.path(from, to));
    assert!(!nav.path(from, to).is_empty());
}
