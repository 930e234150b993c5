//! Fundamental geometric and simulation types.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::constants::WORLD_UP;

/// Stable handle to an entity in the simulation world.
///
/// Wraps the bit pattern of a generational index, so a handle to a destroyed
/// entity never resolves to a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// World-space position and orientation.
/// Local +Z is forward and +Y is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` with identity orientation.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Unit vector the pose is facing.
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    pub fn distance_to(&self, point: DVec3) -> f64 {
        self.position.distance(point)
    }

    /// Turn to face `point`, keeping `WORLD_UP` as up.
    /// Leaves the orientation untouched when the direction is degenerate.
    pub fn face(&mut self, point: DVec3) {
        if let Some(rotation) = look_rotation(point - self.position, WORLD_UP) {
            self.orientation = rotation;
        }
    }
}

/// Rotation whose forward (+Z) axis points along `direction` with `up` as the
/// approximate up axis.
///
/// Looking straight along `up` falls back to +Z as the up axis.
/// Returns `None` only when `direction` is zero.
pub fn look_rotation(direction: DVec3, up: DVec3) -> Option<DQuat> {
    let forward = direction.try_normalize()?;
    let right = up
        .cross(forward)
        .try_normalize()
        .or_else(|| DVec3::Z.cross(forward).try_normalize())?;
    let up = forward.cross(right);
    Some(DQuat::from_mat3(&DMat3::from_cols(right, up, forward)))
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Sum of all elapsed tick durations in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Record one completed tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
