//! Events emitted by the simulation for presentation and bookkeeping.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Something that happened during a tick or a collision callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A spawner produced a new agent.
    AgentSpawned {
        agent: EntityId,
        spawner: EntityId,
        position: DVec3,
    },
    /// The player fired. `direction` is the player's facing at launch.
    ProjectileFired {
        projectile: EntityId,
        owner: EntityId,
        position: DVec3,
        direction: DVec3,
        speed: f64,
    },
    /// A projectile struck an agent and the outcome was drawn.
    AgentShot {
        agent: EntityId,
        projectile: EntityId,
        outcome: CombatOutcome,
    },
    /// A reward dropped where an agent died.
    RewardSpawned {
        reward: EntityId,
        kind: RewardKind,
        position: DVec3,
    },
    /// An agent reached the player.
    PlayerCaught { player: EntityId, agent: EntityId },
    /// An entity was removed from the world.
    Destroyed { entity: EntityId, kind: EntityKind },
    /// The session ended.
    SessionEnded { tick: u64 },
}
