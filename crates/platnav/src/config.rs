use crate::error::BuildError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reachability tuning for graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Maximum cell distance an agent can clear with a jump.
    pub jump_distance: i32,

    /// Maximum drop (in rows) that is still safe to climb back up; longer
    /// drops become one-way edges.
    pub jump_height: i32,
}

impl NavConfig {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.jump_distance < 1 {
            return Err(BuildError::InvalidJumpDistance(self.jump_distance));
        }
        if self.jump_height < 1 {
            return Err(BuildError::InvalidJumpHeight(self.jump_height));
        }
        Ok(())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            jump_distance: 5,
            jump_height: 4,
        }
    }
}
