//! Spawner system: advances every scheduler and instantiates due agents.

use hecs::{Entity, World};
use log::debug;

use undertaker_ai::spawn_fsm;
use undertaker_core::components::SpawnScheduler;
use undertaker_core::config::AgentConfig;
use undertaker_core::events::GameEvent;
use undertaker_core::state::ScoreView;
use undertaker_core::types::{EntityId, Pose};

use crate::handles::id;
use crate::world_setup;

/// Advance all schedulers by `dt`; each due scheduler spawns one agent at its
/// own pose, pursuing `target`.
/// Uses a caller-owned buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    agent_config: &AgentConfig,
    target: EntityId,
    dt: f64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreView,
    spawn_buffer: &mut Vec<(Entity, Pose)>,
) {
    spawn_buffer.clear();

    for (entity, (scheduler, pose)) in world.query_mut::<(&mut SpawnScheduler, &Pose)>() {
        let tick = spawn_fsm::advance(scheduler, dt);
        if tick.spawn {
            spawn_buffer.push((entity, *pose));
        }
        if tick.cycle_reset {
            debug!("spawner {:?} finished its burst, cooling down", id(entity));
        }
    }

    for (spawner, pose) in spawn_buffer.drain(..) {
        let agent = world_setup::spawn_agent(world, agent_config, pose, id(spawner), target);
        debug!("spawner {:?} spawned agent {:?}", id(spawner), id(agent));
        events.push(GameEvent::AgentSpawned {
            agent: id(agent),
            spawner: id(spawner),
            position: pose.position,
        });
        score.agents_spawned += 1;
    }
}
