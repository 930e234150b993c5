//! Scripted input for the headless demo.
//!
//! The autopilot reads the last snapshot and decides which actions are held
//! for the next tick: aim at the nearest agent, fire while any agent is alive,
//! and back away from agents that get too close.

use glam::DVec3;

use undertaker_core::enums::InputAction;
use undertaker_core::input::InputState;
use undertaker_core::state::GameStateSnapshot;

use crate::camera::FollowCamera;

/// Agents closer than this make the autopilot retreat.
pub const DEFAULT_FLEE_RADIUS: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pub flee_radius: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            flee_radius: DEFAULT_FLEE_RADIUS,
        }
    }
}

impl Autopilot {
    /// Input for the tick following `snapshot`.
    pub fn plan(&self, snapshot: &GameStateSnapshot, camera: &FollowCamera) -> InputState {
        let centre = camera.viewport() * 0.5;
        let Some(player) = &snapshot.player else {
            return InputState::new().with_cursor(centre);
        };
        let here = player.pose.position;

        let nearest = snapshot
            .agents
            .iter()
            .map(|agent| agent.pose.position)
            .min_by(|a, b| a.distance_squared(here).total_cmp(&b.distance_squared(here)));
        let Some(threat) = nearest else {
            return InputState::new().with_cursor(centre);
        };

        let cursor = camera.project(threat).unwrap_or(centre);
        let mut input = InputState::new()
            .with_cursor(cursor)
            .with(InputAction::Fire);
        if player.pose.distance_to(threat) < self.flee_radius {
            for action in retreat_actions(here - threat) {
                input.set(action, true);
            }
        }
        input
    }
}

/// Movement keys that push along `away`. Small components are ignored so
/// the player does not zig-zag.
fn retreat_actions(away: DVec3) -> Vec<InputAction> {
    let deadzone = away.length() * 0.25;
    let mut actions = Vec::with_capacity(2);
    if away.x > deadzone {
        actions.push(InputAction::MoveRight);
    } else if away.x < -deadzone {
        actions.push(InputAction::MoveLeft);
    }
    if away.z > deadzone {
        actions.push(InputAction::MoveForward);
    } else if away.z < -deadzone {
        actions.push(InputAction::MoveBack);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use undertaker_core::input::InputSource;
    use undertaker_core::state::{AgentView, PlayerView};
    use undertaker_core::types::{EntityId, Pose};

    fn snapshot_with(agents: &[DVec3]) -> GameStateSnapshot {
        GameStateSnapshot {
            player: Some(PlayerView {
                id: EntityId(1),
                pose: Pose::default(),
                fire_cooldown_remaining: 0.0,
            }),
            agents: agents
                .iter()
                .enumerate()
                .map(|(i, &p)| AgentView {
                    id: EntityId(i as u64 + 2),
                    pose: Pose::at(p),
                    speed: 3.0,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_without_agents() {
        let input = Autopilot::default().plan(&snapshot_with(&[]), &FollowCamera::default());
        assert!(!input.is_active(InputAction::Fire));
        assert!(!input.is_active(InputAction::MoveForward));
    }

    #[test]
    fn test_fires_at_distant_agent_without_moving() {
        let camera = FollowCamera::default();
        let input = Autopilot::default().plan(&snapshot_with(&[DVec3::new(0.0, 0.0, 20.0)]), &camera);
        assert!(input.is_active(InputAction::Fire));
        assert!(!input.is_active(InputAction::MoveBack));
        // Cursor sits above screen centre: the agent is ahead along +Z.
        assert!(input.cursor_screen_position().y > camera.viewport().y * 0.5);
    }

    #[test]
    fn test_retreats_from_close_agent() {
        let snapshot = snapshot_with(&[DVec3::new(30.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 2.0)]);
        let input = Autopilot::default().plan(&snapshot, &FollowCamera::default());
        assert!(input.is_active(InputAction::MoveLeft));
        assert!(input.is_active(InputAction::MoveBack));
        assert!(!input.is_active(InputAction::MoveRight));
    }

    #[test]
    fn test_retreat_deadzone() {
        assert_eq!(retreat_actions(DVec3::new(0.0, 0.0, 5.0)), vec![InputAction::MoveForward]);
        assert!(retreat_actions(DVec3::ZERO).is_empty());
    }
}
