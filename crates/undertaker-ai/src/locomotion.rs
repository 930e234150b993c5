//! Player locomotion, aiming and fire-rate gating.
//!
//! Movement, aim and fire are independent sub-steps of the same tick: none of
//! them blocks another.

use glam::DVec3;

use undertaker_core::enums::InputAction;
use undertaker_core::input::InputSource;
use undertaker_core::types::Pose;

/// Input to the player step for a single tick.
pub struct PlayerContext {
    pub pose: Pose,
    /// Units per second.
    pub speed: f64,
    pub fire_cooldown_remaining: f64,
    pub fire_cooldown_period: f64,
    /// Unit (or zero) movement direction, see [`movement_intent`].
    pub intent: DVec3,
    pub fire_held: bool,
    pub dt: f64,
}

/// Output of the player step.
pub struct PlayerUpdate {
    pub pose: Pose,
    pub fire_cooldown_remaining: f64,
    /// A projectile should be instantiated at `pose`.
    pub fired: bool,
    /// World point the player turned toward.
    pub aim_point: DVec3,
}

/// Result of the fire gate for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireGate {
    pub remaining: f64,
    pub fired: bool,
}

/// Accumulate the four movement actions into a normalised direction.
///
/// Forward/back drive +Z/-Z and right/left drive +X/-X. Opposite actions
/// cancel; nothing held gives zero.
pub fn movement_intent<I: InputSource + ?Sized>(input: &I) -> DVec3 {
    let mut axis = DVec3::ZERO;

    if input.is_active(InputAction::MoveForward) {
        axis.z += 1.0;
    }
    if input.is_active(InputAction::MoveBack) {
        axis.z -= 1.0;
    }
    if input.is_active(InputAction::MoveLeft) {
        axis.x -= 1.0;
    }
    if input.is_active(InputAction::MoveRight) {
        axis.x += 1.0;
    }

    axis.normalize_or_zero()
}

/// Depth along the camera ray at which the cursor is unprojected.
pub fn aim_depth(player: DVec3, camera: DVec3, depth_factor: f64) -> f64 {
    player.distance(camera) * depth_factor
}

/// Count the cooldown down by `dt` (unclamped) and fire if it has elapsed.
pub fn gate_fire(remaining: f64, period: f64, dt: f64, fire_held: bool) -> FireGate {
    let remaining = remaining - dt;
    if fire_held && remaining <= 0.0 {
        FireGate {
            remaining: period,
            fired: true,
        }
    } else {
        FireGate {
            remaining,
            fired: false,
        }
    }
}

/// Run one player tick.
///
/// `aim_at` maps the player's post-move position to the world point under the
/// cursor; the caller owns the camera.
pub fn step(ctx: &PlayerContext, aim_at: impl FnOnce(DVec3) -> DVec3) -> PlayerUpdate {
    let mut pose = ctx.pose;
    pose.position += ctx.intent * ctx.speed * ctx.dt;

    let aim_point = aim_at(pose.position);
    pose.face(aim_point);

    let gate = gate_fire(
        ctx.fire_cooldown_remaining,
        ctx.fire_cooldown_period,
        ctx.dt,
        ctx.fire_held,
    );

    PlayerUpdate {
        pose,
        fire_cooldown_remaining: gate.remaining,
        fired: gate.fired,
        aim_point,
    }
}
