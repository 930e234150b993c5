//! Simulation constants and tuning defaults.
//!
//! These are the authoritative defaults behind `GameConfig::default()`.

use glam::DVec3;

/// World up axis.
pub const WORLD_UP: DVec3 = DVec3::Y;

/// Nominal tick rate of the demo loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Default RNG seed. Same seed = same session.
pub const DEFAULT_SEED: u64 = 42;

// --- Spawning ---

/// Seconds a spawner cools down between bursts.
pub const SPAWN_COOLDOWN_PERIOD: f64 = 5.0;

/// Agents spawned per burst.
pub const SPAWN_BURST_SIZE: u32 = 3;

/// Seconds between individual spawns inside a burst.
pub const SPAWN_BUFFER_PERIOD: f64 = 0.5;

// --- Agents ---

/// Agent pursuit speed (units per second).
pub const AGENT_SPEED: f64 = 3.0;

// --- Player ---

/// Player movement speed (units per second).
pub const PLAYER_SPEED: f64 = 10.0;

/// Seconds between shots.
pub const PLAYER_FIRE_COOLDOWN: f64 = 0.25;

/// Multiplier applied to the player-camera distance to get the unprojection depth.
pub const PLAYER_AIM_DEPTH_FACTOR: f64 = 1.0;

/// Projectile speed handed to whatever moves projectiles (units per second).
pub const PROJECTILE_SPEED: f64 = 30.0;

// --- Combat ---

/// Draws at or below this spawn the primary reward.
pub const PRIMARY_REWARD_THRESHOLD: f64 = 0.3;

/// Draws above the primary threshold and at or below this spawn the secondary reward.
pub const SECONDARY_REWARD_THRESHOLD: f64 = 0.6;
