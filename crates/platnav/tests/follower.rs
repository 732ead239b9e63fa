use platnav::{PathFollower, PathPoint, Vec2};

fn path() -> Vec<PathPoint> {
    vec![
        PathPoint::position_point(Vec2::new(0.0, 0.0)),
        PathPoint::position_point(Vec2::new(100.0, 0.0)),
        PathPoint::position_point(Vec2::new(200.0, 0.0)),
    ]
}

#[test]
fn advances_when_within_arrival_tolerance() {
    let mut follower = PathFollower::default();
    follower.set_path(path());

    // Still far from the first point: keep steering toward it.
    let target = follower.advance(Vec2::new(-50.0, 0.0)).unwrap();
    assert_eq!(target.position, Vec2::new(0.0, 0.0));

    // Close enough to the first point: move on to the second.
    let target = follower.advance(Vec2::new(4.0, 3.0)).unwrap();
    assert_eq!(target.position, Vec2::new(100.0, 0.0));
    assert_eq!(follower.remaining().len(), 2);
}

#[test]
fn consumes_consecutive_reached_points_in_one_step() {
    let mut follower = PathFollower::new(150.0);
    follower.set_path(path());

    // A generous tolerance swallows the first two points at once.
    let target = follower.advance(Vec2::new(10.0, 0.0)).unwrap();
    assert_eq!(target.position, Vec2::new(200.0, 0.0));
}

#[test]
fn finishes_once_every_point_is_reached() {
    let mut follower = PathFollower::default();
    follower.set_path(path());

    assert!(follower.advance(Vec2::new(0.0, 0.0)).is_some());
    assert!(follower.advance(Vec2::new(100.0, 0.0)).is_some());
    assert!(follower.advance(Vec2::new(200.0, 0.0)).is_none());
    assert!(follower.finished());

    follower.set_path(path());
    assert!(!follower.finished());
    follower.clear();
    assert!(follower.finished());
    assert!(follower.target().is_none());
}
