//! Pursuit system: steers every agent toward its target.
//!
//! Target positions are read before any agent moves, so every agent sees the
//! same, previous-tick target position.

use std::collections::HashSet;

use hecs::{Entity, World};

use undertaker_ai::pursuit::{steer, PursuitContext};
use undertaker_core::components::{Agent, Reward};
use undertaker_core::enums::RewardKind;
use undertaker_core::types::{EntityId, Pose};

use crate::error::SimError;
use crate::handles::{self, id};

/// Normalised key for an unordered entity pair.
pub fn pair_key(a: EntityId, b: EntityId) -> (EntityId, EntityId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Register a collision exemption between every agent and every live reward
/// of a kind it is exempt from. Set semantics make this idempotent.
pub fn register_exemptions(world: &World, ignored: &mut HashSet<(EntityId, EntityId)>) {
    let rewards: Vec<(Entity, RewardKind)> = {
        let mut query = world.query::<&Reward>();
        query.iter().map(|(entity, reward)| (entity, reward.kind)).collect()
    };
    if rewards.is_empty() {
        return;
    }

    let mut query = world.query::<&Agent>();
    for (agent_entity, agent) in query.iter() {
        for &(reward_entity, kind) in &rewards {
            if agent.exempt_rewards.contains(&kind) {
                ignored.insert(pair_key(id(agent_entity), id(reward_entity)));
            }
        }
    }
}

/// Steer every agent. Fails if an agent's target no longer exists.
pub fn run(world: &mut World, dt: f64) -> Result<(), SimError> {
    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(Entity, Pose)> = Vec::new();

    {
        let mut query = world.query::<(&Agent, &Pose)>();
        for (entity, (agent, pose)) in query.iter() {
            let target = target_position(world, agent.target)?;
            let update = steer(&PursuitContext {
                pose: *pose,
                target: target.position,
                speed: agent.speed,
                dt,
            });
            updates.push((entity, update.pose));
        }
    }

    for (entity, pose) in updates {
        if let Ok(mut current) = world.get::<&mut Pose>(entity) {
            *current = pose;
        }
    }
    Ok(())
}

fn target_position(world: &World, target: EntityId) -> Result<Pose, SimError> {
    handles::entity(target)
        .and_then(|entity| world.get::<&Pose>(entity).ok().map(|pose| *pose))
        .ok_or(SimError::MissingReference {
            what: "pursuit target",
            entity: target,
        })
}
