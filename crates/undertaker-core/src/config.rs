//! Runtime game configuration loaded from TOML.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! config file only needs the keys it wants to override:
//!
//! ```toml
//! seed = 7
//!
//! [spawner]
//! burst_size = 5
//!
//! [[spawn_points]]
//! position = [12.0, 0.0, -4.0]
//! ```
//!
//! Values are validated after parsing; see [`GameConfig::validate`].

use std::path::Path;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Pose;

/// Top-level configuration for one play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for combat draws.
    pub seed: u64,
    pub spawner: SpawnerConfig,
    /// One spawner entity is created per entry.
    pub spawn_points: Vec<SpawnPoint>,
    pub agent: AgentConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub cooldown_period: f64,
    pub burst_size: u32,
    pub buffer_period: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: DVec3,
    /// Rotation about the world up axis, in degrees.
    #[serde(default)]
    pub yaw_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: DVec3,
    pub speed: f64,
    pub fire_cooldown_period: f64,
    pub aim_depth_factor: f64,
    pub projectile_speed: f64,
}

/// Upper bounds of the reward brackets over a uniform draw in `[0, 1)`.
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub primary_threshold: f64,
    pub secondary_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            spawner: SpawnerConfig::default(),
            spawn_points: default_spawn_points(),
            agent: AgentConfig::default(),
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            cooldown_period: SPAWN_COOLDOWN_PERIOD,
            burst_size: SPAWN_BURST_SIZE,
            buffer_period: SPAWN_BUFFER_PERIOD,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { speed: AGENT_SPEED }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: DVec3::ZERO,
            speed: PLAYER_SPEED,
            fire_cooldown_period: PLAYER_FIRE_COOLDOWN,
            aim_depth_factor: PLAYER_AIM_DEPTH_FACTOR,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            primary_threshold: PRIMARY_REWARD_THRESHOLD,
            secondary_threshold: SECONDARY_REWARD_THRESHOLD,
        }
    }
}

/// Four spawners on the corners of a square around the origin, facing inward.
fn default_spawn_points() -> Vec<SpawnPoint> {
    [(20.0, 20.0), (-20.0, 20.0), (-20.0, -20.0), (20.0, -20.0)]
        .into_iter()
        .map(|(x, z): (f64, f64)| SpawnPoint {
            position: DVec3::new(x, 0.0, z),
            yaw_degrees: (-x).atan2(-z).to_degrees(),
        })
        .collect()
}

impl SpawnPoint {
    pub fn pose(&self) -> Pose {
        Pose::new(
            self.position,
            DQuat::from_rotation_y(self.yaw_degrees.to_radians()),
        )
    }
}

impl GameConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("spawner.cooldown_period", self.spawner.cooldown_period)?;
        non_negative("spawner.buffer_period", self.spawner.buffer_period)?;
        // A zero-sized burst never counts down to its reset point.
        if self.spawner.burst_size == 0 {
            return Err(invalid("spawner.burst_size", "must be at least 1"));
        }

        non_negative("agent.speed", self.agent.speed)?;

        non_negative("player.speed", self.player.speed)?;
        non_negative("player.fire_cooldown_period", self.player.fire_cooldown_period)?;
        non_negative("player.projectile_speed", self.player.projectile_speed)?;
        if !(self.player.aim_depth_factor.is_finite() && self.player.aim_depth_factor > 0.0) {
            return Err(invalid("player.aim_depth_factor", "must be finite and positive"));
        }
        if !self.player.start.is_finite() {
            return Err(invalid("player.start", "must be finite"));
        }
        if let Some(point) = self.spawn_points.iter().find(|p| !p.position.is_finite()) {
            return Err(invalid(
                "spawn_points.position",
                format!("{:?} is not finite", point.position),
            ));
        }

        let CombatConfig {
            primary_threshold,
            secondary_threshold,
        } = self.combat;
        if !(0.0..=1.0).contains(&primary_threshold) {
            return Err(invalid("combat.primary_threshold", "must be within [0, 1]"));
        }
        if !(primary_threshold..=1.0).contains(&secondary_threshold) {
            return Err(invalid(
                "combat.secondary_threshold",
                "must be within [primary_threshold, 1]",
            ));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be finite and non-negative")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
