//! ECS components for simulation entities.
//!
//! Components are plain data structs with no methods.
//! Behaviour lives in `undertaker-ai` and the simulation systems.

use serde::{Deserialize, Serialize};

use crate::enums::RewardKind;
use crate::types::EntityId;

/// Burst-spawning state machine attached to a spawner entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    pub cooldown_remaining: f64,
    /// Spawns left in the current burst, in `0..=burst_size`.
    pub bursts_remaining: u32,
    pub inter_spawn_buffer: f64,
    pub cooldown_period: f64,
    pub burst_size: u32,
    pub buffer_period: f64,
}

/// A hostile entity pursuing a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Units per second.
    pub speed: f64,
    /// Entity being pursued. Not owned.
    pub target: EntityId,
    /// Reward kinds this agent never collides with.
    pub exempt_rewards: [RewardKind; 2],
    /// Spawner that produced this agent.
    pub spawner: EntityId,
}

/// The player-controlled entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Units per second.
    pub speed: f64,
    /// May go negative; anything `<= 0` means ready to fire.
    pub fire_cooldown_remaining: f64,
    pub fire_cooldown_period: f64,
    pub aim_depth_factor: f64,
    /// Speed given to each projectile fired.
    pub projectile_speed: f64,
}

/// A fired projectile. Its flight is simulated outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: EntityId,
    pub speed: f64,
}

/// A reward dropped by a destroyed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub kind: RewardKind,
}
