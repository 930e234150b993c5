//! Snapshot builder: collects the visible world state into a `GameStateSnapshot`.

use hecs::{Entity, World};

use undertaker_ai::spawn_fsm;
use undertaker_core::components::*;
use undertaker_core::enums::SessionPhase;
use undertaker_core::events::GameEvent;
use undertaker_core::state::*;
use undertaker_core::types::{Pose, SimTime};

use crate::handles::id;

/// Build a snapshot. Entity lists are sorted by id so equal worlds produce
/// equal snapshots.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: SessionPhase,
    player: Entity,
    events: Vec<GameEvent>,
    score: ScoreView,
) -> GameStateSnapshot {
    let player = match (world.get::<&Pose>(player), world.get::<&Player>(player)) {
        (Ok(pose), Ok(state)) => Some(PlayerView {
            id: id(player),
            pose: *pose,
            fire_cooldown_remaining: state.fire_cooldown_remaining,
        }),
        _ => None,
    };

    let mut spawners: Vec<SpawnerView> = world
        .query::<(&SpawnScheduler, &Pose)>()
        .iter()
        .map(|(entity, (scheduler, pose))| SpawnerView {
            id: id(entity),
            pose: *pose,
            phase: spawn_fsm::phase(scheduler),
            bursts_remaining: scheduler.bursts_remaining,
        })
        .collect();
    spawners.sort_by_key(|view| view.id);

    let mut agents: Vec<AgentView> = world
        .query::<(&Agent, &Pose)>()
        .iter()
        .map(|(entity, (agent, pose))| AgentView {
            id: id(entity),
            pose: *pose,
            speed: agent.speed,
        })
        .collect();
    agents.sort_by_key(|view| view.id);

    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Pose)>()
        .iter()
        .map(|(entity, (projectile, pose))| ProjectileView {
            id: id(entity),
            pose: *pose,
            owner: projectile.owner,
            speed: projectile.speed,
        })
        .collect();
    projectiles.sort_by_key(|view| view.id);

    let mut rewards: Vec<RewardView> = world
        .query::<(&Reward, &Pose)>()
        .iter()
        .map(|(entity, (reward, pose))| RewardView {
            id: id(entity),
            pose: *pose,
            kind: reward.kind,
        })
        .collect();
    rewards.sort_by_key(|view| view.id);

    GameStateSnapshot {
        time,
        phase,
        player,
        spawners,
        agents,
        projectiles,
        rewards,
        events,
        score,
    }
}
