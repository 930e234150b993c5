//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Entities tick every frame.
    #[default]
    Active,
    /// The player was destroyed. Ticks no longer advance the world.
    Ended,
}

/// The two reward objects an agent can drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RewardKind {
    Primary,
    Secondary,
}

/// Result of a projectile hitting an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    SpawnPrimary,
    SpawnSecondary,
    NoReward,
}

impl CombatOutcome {
    /// The reward this outcome drops, if any.
    pub fn reward(self) -> Option<RewardKind> {
        match self {
            CombatOutcome::SpawnPrimary => Some(RewardKind::Primary),
            CombatOutcome::SpawnSecondary => Some(RewardKind::Secondary),
            CombatOutcome::NoReward => None,
        }
    }
}

/// What an agent collided with, as reported by the physics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Projectile(EntityId),
    PlayerBody(EntityId),
    Reward(EntityId),
    Other(EntityId),
}

impl Contact {
    /// The entity on the other side of the contact.
    pub fn entity(self) -> EntityId {
        match self {
            Contact::Projectile(e)
            | Contact::PlayerBody(e)
            | Contact::Reward(e)
            | Contact::Other(e) => e,
        }
    }
}

/// Logical input actions, polled level-triggered each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Fire,
}

/// Phase of a spawn scheduler, derived from its timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPhase {
    /// Waiting out the cooldown between bursts.
    Cooling,
    /// Waiting out the buffer before the next spawn of a burst.
    Buffering,
    /// Buffer elapsed, one agent spawns this tick.
    Bursting,
}

/// Category of a simulation entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Spawner,
    Agent,
    Player,
    Projectile,
    Reward,
    Unknown,
}
