//! Game loop: drives the simulation engine at a fixed tick rate.
//!
//! Each iteration plans input from the previous snapshot, ticks the engine,
//! moves the camera, then lets the demo physics deliver collisions before the
//! next tick. With `realtime` set the loop sleeps to hold the nominal rate.

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use undertaker_core::enums::SessionPhase;
use undertaker_core::state::{GameStateSnapshot, ScoreView};
use undertaker_sim::{CombatResolution, SimulationEngine};

use crate::camera::FollowCamera;
use crate::error::AppError;
use crate::input::Autopilot;
use crate::physics::{DemoPhysics, PhysicsConfig};

#[derive(Debug, Clone)]
pub struct LoopOptions {
    pub ticks: u64,
    pub tick_rate: u32,
    pub realtime: bool,
    pub restart_on_death: bool,
}

impl LoopOptions {
    /// Seconds of simulated time per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate)
    }

    fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate))
    }
}

/// What happened over a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub ticks_run: u64,
    /// Sessions that ended with the player caught.
    pub sessions_lost: u32,
    /// Score of the session that was running when the loop stopped.
    pub final_score: ScoreView,
    pub final_phase: SessionPhase,
    pub agents_shot: u32,
}

/// Run `engine` for up to `options.ticks` ticks.
pub fn run(engine: &mut SimulationEngine, options: &LoopOptions) -> Result<RunSummary, AppError> {
    let dt = options.dt();
    let tick_duration = options.tick_duration();

    let autopilot = Autopilot::default();
    let mut camera = FollowCamera::default();
    let mut physics = DemoPhysics::new(PhysicsConfig::default());
    let mut summary = RunSummary::default();
    let mut last = GameStateSnapshot::default();
    let mut next_tick_time = Instant::now();

    while summary.ticks_run < options.ticks {
        // 1. Decide input from what the player saw last tick
        let input = autopilot.plan(&last, &camera);

        // 2. Advance the simulation
        let snapshot = engine.tick(dt, &input, &camera)?;
        summary.ticks_run += 1;

        // 3. Camera follows the player
        if let Some(player) = &snapshot.player {
            camera.follow(player.pose.position);
        }

        // 4. Physics flies projectiles and reports contacts
        physics.ingest(&snapshot.events);
        for resolution in physics.step(engine, &snapshot, dt) {
            if let CombatResolution::AgentShot { outcome, .. } = resolution {
                debug!("agent shot: {outcome:?}");
                summary.agents_shot += 1;
            }
        }

        // 5. Session over?
        if engine.phase() == SessionPhase::Ended {
            summary.sessions_lost += 1;
            info!(
                "player caught after {:.1}s ({} agents destroyed)",
                engine.time().elapsed_secs,
                engine.score().agents_destroyed
            );
            if !options.restart_on_death {
                break;
            }
            engine.restart();
            physics.clear();
            last = GameStateSnapshot::default();
        } else {
            last = snapshot;
        }

        // 6. Sleep until next tick
        if options.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    summary.final_score = engine.score();
    summary.final_phase = engine.phase();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use undertaker_core::config::GameConfig;

    fn options(ticks: u64) -> LoopOptions {
        LoopOptions {
            ticks,
            tick_rate: 60,
            realtime: false,
            restart_on_death: false,
        }
    }

    #[test]
    fn test_tick_duration() {
        let opts = options(1);
        assert_eq!(opts.tick_duration().as_nanos(), 1_000_000_000u128 / 60);
        assert!((opts.dt() - 1.0 / 60.0).abs() < 1e-15);
    }

    #[test]
    fn test_run_is_deterministic() {
        let run_once = || {
            let mut engine = SimulationEngine::new(GameConfig::default()).unwrap();
            let summary = run(&mut engine, &options(1200)).unwrap();
            serde_json::to_string(&summary).unwrap()
        };
        assert_eq!(run_once(), run_once());
    }

    #[test]
    fn test_autopilot_fights_back() {
        let mut engine = SimulationEngine::new(GameConfig::default()).unwrap();
        let summary = run(&mut engine, &options(1200)).unwrap();
        assert!(summary.ticks_run > 0);
        assert!(summary.final_score.agents_spawned > 0);
        assert!(summary.final_score.projectiles_fired > 0);
    }

    #[test]
    fn test_stops_when_caught_unless_restarting() {
        // A spawner on top of the player ends each session on its first spawn.
        let config = GameConfig {
            spawn_points: vec![undertaker_core::config::SpawnPoint {
                position: glam::DVec3::new(0.0, 0.0, 0.5),
                yaw_degrees: 0.0,
            }],
            ..Default::default()
        };

        let mut engine = SimulationEngine::new(config.clone()).unwrap();
        let summary = run(&mut engine, &options(10_000)).unwrap();
        assert_eq!(summary.sessions_lost, 1);
        assert_eq!(summary.final_phase, SessionPhase::Ended);
        assert!(summary.ticks_run < 10_000);

        let mut engine = SimulationEngine::new(config).unwrap();
        let summary = run(
            &mut engine,
            &LoopOptions {
                restart_on_death: true,
                ..options(2000)
            },
        )
        .unwrap();
        assert_eq!(summary.ticks_run, 2000);
        assert!(summary.sessions_lost >= 2);
    }
}
