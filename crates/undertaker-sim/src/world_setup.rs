//! Entity spawn factories.
//!
//! Every entity carries a `Pose`; its role comes from one extra component.

use hecs::{Entity, World};

use undertaker_ai::spawn_fsm;
use undertaker_core::components::*;
use undertaker_core::config::{AgentConfig, GameConfig, PlayerConfig, SpawnerConfig};
use undertaker_core::enums::RewardKind;
use undertaker_core::types::{EntityId, Pose};

/// Populate a fresh world: the player plus one spawner per spawn point.
/// Returns the player entity.
pub fn setup_session(world: &mut World, config: &GameConfig) -> Entity {
    let player = spawn_player(world, &config.player);
    for point in &config.spawn_points {
        spawn_spawner(world, &config.spawner, point.pose());
    }
    player
}

/// Spawn the player at its configured start, ready to fire.
pub fn spawn_player(world: &mut World, config: &PlayerConfig) -> Entity {
    world.spawn((
        Pose::at(config.start),
        Player {
            speed: config.speed,
            fire_cooldown_remaining: 0.0,
            fire_cooldown_period: config.fire_cooldown_period,
            aim_depth_factor: config.aim_depth_factor,
            projectile_speed: config.projectile_speed,
        },
    ))
}

pub fn spawn_spawner(world: &mut World, config: &SpawnerConfig, pose: Pose) -> Entity {
    world.spawn((pose, spawn_fsm::new_scheduler(config)))
}

/// Spawn an agent at `pose` pursuing `target`.
pub fn spawn_agent(
    world: &mut World,
    config: &AgentConfig,
    pose: Pose,
    spawner: EntityId,
    target: EntityId,
) -> Entity {
    world.spawn((
        pose,
        Agent {
            speed: config.speed,
            target,
            exempt_rewards: [RewardKind::Primary, RewardKind::Secondary],
            spawner,
        },
    ))
}

pub fn spawn_reward(world: &mut World, kind: RewardKind, pose: Pose) -> Entity {
    world.spawn((pose, Reward { kind }))
}

pub fn spawn_projectile(world: &mut World, pose: Pose, owner: EntityId, speed: f64) -> Entity {
    world.spawn((pose, Projectile { owner, speed }))
}
