//! Pursuit steering: face the target and close in on it.

use glam::DVec3;

use undertaker_core::constants::WORLD_UP;
use undertaker_core::types::{look_rotation, Pose};

/// Input to the steering step for a single agent.
pub struct PursuitContext {
    pub pose: Pose,
    /// Target position as of the previous completed tick.
    pub target: DVec3,
    /// Units per second.
    pub speed: f64,
    pub dt: f64,
}

/// Output of the steering step.
pub struct PursuitUpdate {
    pub pose: Pose,
    /// Unit direction travelled, zero when already on the target.
    pub direction: DVec3,
}

/// Turn toward the target and advance `speed * dt` along the line to it.
///
/// The step is not clamped to the remaining distance, so an agent closer than
/// one step overshoots and turns back on the next tick.
pub fn steer(ctx: &PursuitContext) -> PursuitUpdate {
    let Some(direction) = (ctx.target - ctx.pose.position).try_normalize() else {
        return PursuitUpdate {
            pose: ctx.pose,
            direction: DVec3::ZERO,
        };
    };

    let orientation = look_rotation(direction, WORLD_UP).unwrap_or(ctx.pose.orientation);
    let position = ctx.pose.position + direction * ctx.speed * ctx.dt;

    PursuitUpdate {
        pose: Pose::new(position, orientation),
        direction,
    }
}
