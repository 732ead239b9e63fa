use crate::{navigator::PathPoint, Vec2};

/// Default arrival tolerance, in world units.
pub const DEFAULT_ARRIVE_DISTANCE: f32 = 10.0;

/// Reference path consumer: an index cursor over a resolved path.
///
/// The owning state machine feeds in the agent's position each frame;
/// `advance` consumes every point already within the arrival tolerance and
/// returns the one to steer toward. Re-planning policy (when to request a new
/// path) stays with the caller.
#[derive(Debug, Clone)]
pub struct PathFollower {
    path: Vec<PathPoint>,
    next_index: usize,
    arrive_distance: f32,
}

impl PathFollower {
    pub fn new(arrive_distance: f32) -> Self {
        Self {
            path: Vec::new(),
            next_index: 0,
            arrive_distance,
        }
    }

    /// Replace the current path and rewind the cursor.
    pub fn set_path(&mut self, path: Vec<PathPoint>) {
        self.path = path;
        self.next_index = 0;
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.next_index = 0;
    }

    /// The point the agent should currently steer toward.
    pub fn target(&self) -> Option<&PathPoint> {
        self.path.get(self.next_index)
    }

    pub fn remaining(&self) -> &[PathPoint] {
        &self.path[self.next_index.min(self.path.len())..]
    }

    pub fn finished(&self) -> bool {
        self.next_index >= self.path.len()
    }

    /// Advance past every point within the arrival tolerance of `position`
    /// and return the new target, or `None` once the path is exhausted.
    pub fn advance(&mut self, position: Vec2) -> Option<&PathPoint> {
        while let Some(point) = self.path.get(self.next_index) {
            if position.distance(point.position) < self.arrive_distance {
                self.next_index += 1;
            } else {
                break;
            }
        }
        self.path.get(self.next_index)
    }
}

impl Default for PathFollower {
    fn default() -> Self {
        Self::new(DEFAULT_ARRIVE_DISTANCE)
    }
}
