//! Minimal collision layer for the demo.
//!
//! The simulation creates projectiles but does not move them. `DemoPhysics`
//! flies every fired projectile in a straight line, tests sphere overlaps
//! against live agents and reports contacts back to the engine.

use std::collections::BTreeMap;

use glam::DVec3;
use log::debug;

use undertaker_core::enums::SessionPhase;
use undertaker_core::events::GameEvent;
use undertaker_core::state::GameStateSnapshot;
use undertaker_core::types::EntityId;
use undertaker_sim::{CombatResolution, SimulationEngine};

/// Collision radii and projectile range.
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    pub agent_radius: f64,
    pub player_radius: f64,
    pub projectile_radius: f64,
    pub reward_radius: f64,
    /// Projectiles are destroyed after travelling this far.
    pub max_range: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            agent_radius: 0.5,
            player_radius: 0.5,
            projectile_radius: 0.1,
            reward_radius: 0.4,
            max_range: 60.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Flight {
    position: DVec3,
    velocity: DVec3,
    travelled: f64,
}

#[derive(Debug, Default)]
pub struct DemoPhysics {
    config: PhysicsConfig,
    flights: BTreeMap<EntityId, Flight>,
}

impl DemoPhysics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            flights: BTreeMap::new(),
        }
    }

    /// Projectiles currently in flight.
    pub fn in_flight(&self) -> usize {
        self.flights.len()
    }

    /// Forget every flight, e.g. after a session restart.
    pub fn clear(&mut self) {
        self.flights.clear();
    }

    /// Start tracking projectiles announced in `events`.
    pub fn ingest(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::ProjectileFired {
                projectile,
                position,
                direction,
                speed,
                ..
            } = event
            {
                self.flights.insert(
                    *projectile,
                    Flight {
                        position: *position,
                        velocity: *direction * *speed,
                        travelled: 0.0,
                    },
                );
            }
        }
    }

    /// Move projectiles by `dt`, then deliver every overlap involving an agent
    /// in `snapshot` to the engine. Returns the resolutions in delivery order.
    pub fn step(
        &mut self,
        engine: &mut SimulationEngine,
        snapshot: &GameStateSnapshot,
        dt: f64,
    ) -> Vec<CombatResolution> {
        self.advance(engine, dt);

        let mut resolutions = Vec::new();
        for agent in &snapshot.agents {
            if engine.phase() == SessionPhase::Ended {
                break;
            }
            let centre = agent.pose.position;
            for contact in self.overlaps(centre, snapshot) {
                if engine.is_collision_ignored(agent.id, contact) {
                    continue;
                }
                let contact = engine.classify(contact);
                let resolution = engine.on_collision(agent.id, contact);
                if let CombatResolution::AgentShot { projectile, .. } = resolution {
                    self.flights.remove(&projectile);
                }
                if resolution != CombatResolution::Ignored {
                    resolutions.push(resolution);
                }
            }
        }
        resolutions
    }

    fn advance(&mut self, engine: &mut SimulationEngine, dt: f64) {
        let max_range = self.config.max_range;
        let mut spent = Vec::new();
        for (&id, flight) in &mut self.flights {
            let step = flight.velocity * dt;
            flight.position += step;
            flight.travelled += step.length();
            if flight.travelled > max_range {
                spent.push(id);
            }
        }
        for id in spent {
            self.flights.remove(&id);
            if engine.destroy(id) {
                debug!("projectile {id:?} out of range");
            }
        }
    }

    /// Everything overlapping an agent centred at `centre`: projectiles first,
    /// then the player, then rewards.
    fn overlaps(&self, centre: DVec3, snapshot: &GameStateSnapshot) -> Vec<EntityId> {
        let cfg = &self.config;
        let touching =
            |other: DVec3, radius: f64| centre.distance(other) <= cfg.agent_radius + radius;

        let mut hits: Vec<EntityId> = self
            .flights
            .iter()
            .filter(|(_, flight)| touching(flight.position, cfg.projectile_radius))
            .map(|(&id, _)| id)
            .collect();
        if let Some(player) = &snapshot.player {
            if touching(player.pose.position, cfg.player_radius) {
                hits.push(player.id);
            }
        }
        hits.extend(
            snapshot
                .rewards
                .iter()
                .filter(|reward| touching(reward.pose.position, cfg.reward_radius))
                .map(|reward| reward.id),
        );
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use undertaker_core::config::{AgentConfig, GameConfig, SpawnPoint, SpawnerConfig};
    use undertaker_core::enums::{Contact, InputAction};
    use undertaker_core::input::InputState;

    use crate::camera::FollowCamera;

    fn quiet_engine() -> SimulationEngine {
        SimulationEngine::new(GameConfig {
            spawn_points: Vec::new(),
            ..Default::default()
        })
        .unwrap()
    }

    fn fired(projectile: EntityId, position: DVec3, direction: DVec3) -> GameEvent {
        GameEvent::ProjectileFired {
            projectile,
            owner: EntityId(1),
            position,
            direction,
            speed: 10.0,
        }
    }

    #[test]
    fn test_ingest_tracks_fired_projectiles() {
        let mut physics = DemoPhysics::default();
        physics.ingest(&[
            fired(EntityId(7), DVec3::ZERO, DVec3::Z),
            GameEvent::SessionEnded { tick: 3 },
        ]);
        assert_eq!(physics.in_flight(), 1);
        physics.clear();
        assert_eq!(physics.in_flight(), 0);
    }

    #[test]
    fn test_fired_projectile_flies_until_out_of_range() {
        let mut engine = quiet_engine();
        let mut physics = DemoPhysics::new(PhysicsConfig {
            max_range: 5.0,
            ..Default::default()
        });
        let camera = FollowCamera::default();
        let input = InputState::new()
            .with(InputAction::Fire)
            .with_cursor(camera.viewport() * 0.5 + glam::DVec2::new(0.0, 100.0));

        let snapshot = engine.tick(0.1, &input, &camera).unwrap();
        physics.ingest(&snapshot.events);
        assert_eq!(physics.in_flight(), 1);
        let projectile = snapshot.projectiles[0].id;

        // 30 u/s for 0.1 s per step: out of a 5 unit range on the second step.
        physics.step(&mut engine, &snapshot, 0.1);
        assert_eq!(physics.in_flight(), 1);
        physics.step(&mut engine, &snapshot, 0.1);
        assert_eq!(physics.in_flight(), 0);
        assert_eq!(engine.classify(projectile), Contact::Other(projectile));
    }

    /// One spawner at `at` that spawns a stationary agent every tick.
    fn engine_with_agent_at(at: DVec3) -> SimulationEngine {
        SimulationEngine::new(GameConfig {
            spawner: SpawnerConfig {
                cooldown_period: 0.0,
                burst_size: 1,
                buffer_period: 0.0,
            },
            spawn_points: vec![SpawnPoint {
                position: at,
                yaw_degrees: 0.0,
            }],
            agent: AgentConfig { speed: 0.0 },
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_projectile_hit_is_reported() {
        let mut engine = engine_with_agent_at(DVec3::new(0.0, 0.0, 3.0));
        let mut physics = DemoPhysics::default();
        let camera = FollowCamera::default();
        let input = InputState::new()
            .with(InputAction::Fire)
            .with_cursor(camera.viewport() * 0.5 + glam::DVec2::new(0.0, 100.0));

        let snapshot = engine.tick(0.05, &input, &camera).unwrap();
        assert_eq!(snapshot.agents.len(), 1);
        physics.ingest(&snapshot.events);

        let resolutions = physics.step(&mut engine, &snapshot, 0.1);
        assert_eq!(resolutions.len(), 1);
        assert!(matches!(resolutions[0], CombatResolution::AgentShot { .. }));
        assert_eq!(physics.in_flight(), 0);
        assert_eq!(engine.score().agents_destroyed, 1);
    }

    #[test]
    fn test_player_contact_ends_session() {
        let mut engine = engine_with_agent_at(DVec3::new(0.0, 0.0, 0.5));
        let mut physics = DemoPhysics::default();
        let camera = FollowCamera::default();
        let player = engine.player_id();

        let snapshot = engine.tick(0.05, &InputState::new(), &camera).unwrap();
        let resolutions = physics.step(&mut engine, &snapshot, 0.05);
        assert_eq!(resolutions, vec![CombatResolution::PlayerCaught { player }]);
        assert_eq!(engine.phase(), SessionPhase::Ended);
    }
}
