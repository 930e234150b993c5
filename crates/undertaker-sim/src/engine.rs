//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs world, runs all systems once per tick,
//! resolves collision notifications between ticks, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::HashSet;

use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use undertaker_ai::combat::{self, CombatResolution};
use undertaker_core::components::Agent;
use undertaker_core::config::GameConfig;
use undertaker_core::enums::{Contact, EntityKind, RewardKind, SessionPhase};
use undertaker_core::events::GameEvent;
use undertaker_core::input::InputSource;
use undertaker_core::state::{GameStateSnapshot, ScoreView};
use undertaker_core::types::{EntityId, Pose, SimTime};

use crate::collaborators::Camera;
use crate::error::SimError;
use crate::handles::{self, id};
use crate::systems;
use crate::systems::pursuit::pair_key;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    player: Entity,
    ignored_pairs: HashSet<(EntityId, EntityId)>,
    events: Vec<GameEvent>,
    score: ScoreView,
    spawn_buffer: Vec<(Entity, Pose)>,
}

impl SimulationEngine {
    /// Validate `config` and set up a new session. Same seed = same session.
    pub fn new(config: GameConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut world = World::new();
        let player = world_setup::setup_session(&mut world, &config);
        info!(
            "session started: seed {}, {} spawner(s)",
            config.seed,
            config.spawn_points.len()
        );

        Ok(Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: SessionPhase::Active,
            player,
            ignored_pairs: HashSet::new(),
            events: Vec::new(),
            score: ScoreView::default(),
            spawn_buffer: Vec::new(),
        })
    }

    /// Discard the world and start a fresh session with the same config.
    /// The RNG stream continues rather than restarting.
    pub fn restart(&mut self) {
        // Despawn one by one so generations advance and old ids stay dead.
        let entities: Vec<Entity> = self.world.iter().map(|entity| entity.entity()).collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
        self.player = world_setup::setup_session(&mut self.world, &self.config);
        self.time = SimTime::default();
        self.phase = SessionPhase::Active;
        self.ignored_pairs.clear();
        self.events.clear();
        self.score = ScoreView::default();
        info!("session restarted");
    }

    /// Advance the simulation by `elapsed` seconds and return the resulting snapshot.
    ///
    /// Once the session has ended the world is frozen: the snapshot is still
    /// produced but nothing moves and time does not advance.
    pub fn tick<I, C>(
        &mut self,
        elapsed: f64,
        input: &I,
        camera: &C,
    ) -> Result<GameStateSnapshot, SimError>
    where
        I: InputSource + ?Sized,
        C: Camera + ?Sized,
    {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(SimError::InvalidElapsed(elapsed));
        }

        if self.phase == SessionPhase::Active {
            self.run_systems(elapsed, input, camera)?;
            self.time.advance(elapsed);
        }

        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.player,
            events,
            self.score,
        ))
    }

    /// Resolve a collision reported by the physics layer for `agent`.
    ///
    /// Notifications for an agent that no longer exists are ignored, so a
    /// second contact in the same frame cannot destroy anything twice.
    pub fn on_collision(&mut self, agent: EntityId, contact: Contact) -> CombatResolution {
        let Some(agent_entity) = handles::entity(agent) else {
            return CombatResolution::Ignored;
        };
        if self.world.get::<&Agent>(agent_entity).is_err() {
            debug!("collision for stale agent {agent:?} ignored");
            return CombatResolution::Ignored;
        }
        let pose = match self.world.get::<&Pose>(agent_entity) {
            Ok(pose) => *pose,
            Err(_) => return CombatResolution::Ignored,
        };
        match contact {
            Contact::PlayerBody(player) if player != id(self.player) => {
                debug!("player contact with non-player {player:?} ignored");
                return CombatResolution::Ignored;
            }
            // A projectile may already be gone, but a live payload must be one.
            Contact::Projectile(projectile) => match self.kind_of(projectile) {
                EntityKind::Projectile | EntityKind::Unknown => {}
                kind => {
                    debug!("projectile contact with {kind:?} {projectile:?} ignored");
                    return CombatResolution::Ignored;
                }
            },
            _ => {}
        }

        let resolution = combat::resolve(contact, &self.config.combat, &mut self.rng);
        match resolution {
            CombatResolution::AgentShot {
                projectile,
                draw,
                outcome,
            } => {
                debug!("agent {agent:?} shot by {projectile:?}: draw {draw:.3} -> {outcome:?}");
                self.events.push(GameEvent::AgentShot {
                    agent,
                    projectile,
                    outcome,
                });
                if let Some(kind) = outcome.reward() {
                    let reward = world_setup::spawn_reward(&mut self.world, kind, pose);
                    self.events.push(GameEvent::RewardSpawned {
                        reward: id(reward),
                        kind,
                        position: pose.position,
                    });
                    match kind {
                        RewardKind::Primary => self.score.primary_rewards += 1,
                        RewardKind::Secondary => self.score.secondary_rewards += 1,
                    }
                }
                self.destroy(agent);
                self.destroy(projectile);
            }
            CombatResolution::PlayerCaught { player } => {
                self.events.push(GameEvent::PlayerCaught { player, agent });
                self.destroy(player);
            }
            CombatResolution::Ignored => {}
        }
        resolution
    }

    /// Remove an entity from the world.
    ///
    /// Returns `false`, with no side effects, if the entity is already gone.
    /// Destroying the player ends the session.
    pub fn destroy(&mut self, entity: EntityId) -> bool {
        let Some(handle) = handles::entity(entity) else {
            return false;
        };
        let kind = handles::kind_of(&self.world, handle);
        if self.world.despawn(handle).is_err() {
            return false;
        }

        self.ignored_pairs.retain(|&(a, b)| a != entity && b != entity);
        self.events.push(GameEvent::Destroyed { entity, kind });
        if kind == EntityKind::Agent {
            self.score.agents_destroyed += 1;
        }

        if handle == self.player && self.phase == SessionPhase::Active {
            self.phase = SessionPhase::Ended;
            self.events.push(GameEvent::SessionEnded {
                tick: self.time.tick,
            });
            info!(
                "player destroyed at tick {}; session ended ({} agents destroyed)",
                self.time.tick, self.score.agents_destroyed
            );
        }
        true
    }

    /// Classify an entity for a collision notification.
    pub fn classify(&self, entity: EntityId) -> Contact {
        match self.kind_of(entity) {
            EntityKind::Projectile => Contact::Projectile(entity),
            EntityKind::Player => Contact::PlayerBody(entity),
            EntityKind::Reward => Contact::Reward(entity),
            _ => Contact::Other(entity),
        }
    }

    /// Category of a live entity; `Unknown` for destroyed or foreign ids.
    pub fn kind_of(&self, entity: EntityId) -> EntityKind {
        match handles::entity(entity) {
            Some(handle) if self.world.contains(handle) => handles::kind_of(&self.world, handle),
            _ => EntityKind::Unknown,
        }
    }

    /// Current pose of a live entity.
    pub fn pose_of(&self, entity: EntityId) -> Option<Pose> {
        let handle = handles::entity(entity)?;
        self.world.get::<&Pose>(handle).ok().map(|pose| *pose)
    }

    /// Whether the physics layer should skip collisions between `a` and `b`.
    pub fn is_collision_ignored(&self, a: EntityId, b: EntityId) -> bool {
        self.ignored_pairs.contains(&pair_key(a, b))
    }

    /// All registered collision exemptions, each pair in ascending id order.
    pub fn ignored_pairs(&self) -> impl Iterator<Item = (EntityId, EntityId)> + '_ {
        self.ignored_pairs.iter().copied()
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the running score.
    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn player_id(&self) -> EntityId {
        id(self.player)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Spawn an agent directly, bypassing the spawners (for testing).
    #[cfg(test)]
    pub fn spawn_test_agent(&mut self, pose: Pose, target: EntityId) -> EntityId {
        let agent =
            world_setup::spawn_agent(&mut self.world, &self.config.agent, pose, target, target);
        id(agent)
    }

    /// Spawn a projectile owned by the player (for testing).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, pose: Pose) -> EntityId {
        let owner = id(self.player);
        let speed = self.config.player.projectile_speed;
        id(world_setup::spawn_projectile(&mut self.world, pose, owner, speed))
    }

    /// Spawn a reward (for testing).
    #[cfg(test)]
    pub fn spawn_test_reward(&mut self, kind: RewardKind, pose: Pose) -> EntityId {
        id(world_setup::spawn_reward(&mut self.world, kind, pose))
    }

    /// Run all systems in order.
    fn run_systems<I, C>(&mut self, dt: f64, input: &I, camera: &C) -> Result<(), SimError>
    where
        I: InputSource + ?Sized,
        C: Camera + ?Sized,
    {
        let player = id(self.player);

        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &self.config.agent,
            player,
            dt,
            &mut self.events,
            &mut self.score,
            &mut self.spawn_buffer,
        );
        // 2. Collision exemptions against rewards
        systems::pursuit::register_exemptions(&self.world, &mut self.ignored_pairs);
        // 3. Pursuit (reads the player position before it moves)
        systems::pursuit::run(&mut self.world, dt)?;
        // 4. Player movement, aim, fire
        systems::player::run(
            &mut self.world,
            self.player,
            dt,
            input,
            camera,
            &mut self.events,
            &mut self.score,
        )
    }
}
