//! Spawn scheduler state machine.
//!
//! One scheduler cycle is Cooling -> (Buffering -> Bursting) x burst_size.
//! Exactly one branch runs per tick, so a tick that spawns never also counts
//! down a timer.

use undertaker_core::components::SpawnScheduler;
use undertaker_core::config::SpawnerConfig;
use undertaker_core::enums::SpawnPhase;

/// What happened to a scheduler during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTick {
    /// Phase the scheduler was in when the tick began.
    pub phase: SpawnPhase,
    /// Whether one agent should be instantiated this tick.
    pub spawn: bool,
    /// Whether the burst finished and the cycle restarted.
    pub cycle_reset: bool,
}

/// Fresh scheduler at the start of its first cooldown.
pub fn new_scheduler(config: &SpawnerConfig) -> SpawnScheduler {
    SpawnScheduler {
        cooldown_remaining: config.cooldown_period,
        bursts_remaining: config.burst_size,
        inter_spawn_buffer: config.buffer_period,
        cooldown_period: config.cooldown_period,
        burst_size: config.burst_size,
        buffer_period: config.buffer_period,
    }
}

/// Phase implied by the scheduler's timers. Negative timers count as elapsed.
pub fn phase(scheduler: &SpawnScheduler) -> SpawnPhase {
    if scheduler.cooldown_remaining > 0.0 {
        SpawnPhase::Cooling
    } else if scheduler.inter_spawn_buffer > 0.0 {
        SpawnPhase::Buffering
    } else {
        SpawnPhase::Bursting
    }
}

/// Advance the scheduler by `dt` seconds.
pub fn advance(scheduler: &mut SpawnScheduler, dt: f64) -> SpawnTick {
    let phase = phase(scheduler);

    let spawn = match phase {
        SpawnPhase::Cooling => {
            scheduler.cooldown_remaining -= dt;
            false
        }
        SpawnPhase::Buffering => {
            scheduler.inter_spawn_buffer -= dt;
            false
        }
        SpawnPhase::Bursting => {
            scheduler.bursts_remaining = scheduler.bursts_remaining.saturating_sub(1);
            scheduler.inter_spawn_buffer = scheduler.buffer_period;
            true
        }
    };

    let cycle_reset = scheduler.bursts_remaining == 0;
    if cycle_reset {
        scheduler.bursts_remaining = scheduler.burst_size;
        scheduler.cooldown_remaining = scheduler.cooldown_period;
    }

    SpawnTick {
        phase,
        spawn,
        cycle_reset,
    }
}
