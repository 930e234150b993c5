//! Game state snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, Pose, SimTime};

/// Complete game state returned by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// `None` once the player has been destroyed.
    pub player: Option<PlayerView>,
    pub spawners: Vec<SpawnerView>,
    pub agents: Vec<AgentView>,
    pub projectiles: Vec<ProjectileView>,
    pub rewards: Vec<RewardView>,
    /// Events since the previous snapshot, including collision callbacks.
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: EntityId,
    pub pose: Pose,
    pub fire_cooldown_remaining: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerView {
    pub id: EntityId,
    pub pose: Pose,
    pub phase: SpawnPhase,
    pub bursts_remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: EntityId,
    pub pose: Pose,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub pose: Pose,
    pub owner: EntityId,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardView {
    pub id: EntityId,
    pub pose: Pose,
    pub kind: RewardKind,
}

/// Running totals for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub agents_spawned: u32,
    pub agents_destroyed: u32,
    pub projectiles_fired: u32,
    pub primary_rewards: u32,
    pub secondary_rewards: u32,
}
