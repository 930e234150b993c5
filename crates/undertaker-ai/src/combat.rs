//! Combat resolution for agent collisions.
//!
//! Stateless: the caller supplies the contact and a random source, and gets
//! back what should happen. Applying the result (spawning the reward,
//! destroying entities) is the simulation's job.

use rand::Rng;

use undertaker_core::config::CombatConfig;
use undertaker_core::enums::{CombatOutcome, Contact};
use undertaker_core::types::EntityId;

/// Decision for one collision notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatResolution {
    /// A projectile hit the agent. Agent and projectile are both destroyed;
    /// the outcome only decides the reward.
    AgentShot {
        projectile: EntityId,
        draw: f64,
        outcome: CombatOutcome,
    },
    /// The agent reached the player, who is destroyed.
    PlayerCaught { player: EntityId },
    /// Nothing happens.
    Ignored,
}

/// Map a uniform draw in `[0, 1)` to an outcome. Bracket upper bounds are inclusive.
pub fn outcome_for_draw(draw: f64, thresholds: &CombatConfig) -> CombatOutcome {
    if draw <= thresholds.primary_threshold {
        CombatOutcome::SpawnPrimary
    } else if draw <= thresholds.secondary_threshold {
        CombatOutcome::SpawnSecondary
    } else {
        CombatOutcome::NoReward
    }
}

/// Resolve a contact. Only projectile contacts consume a draw from `rng`.
pub fn resolve<R: Rng + ?Sized>(
    contact: Contact,
    thresholds: &CombatConfig,
    rng: &mut R,
) -> CombatResolution {
    match contact {
        Contact::Projectile(projectile) => {
            let draw: f64 = rng.gen();
            CombatResolution::AgentShot {
                projectile,
                draw,
                outcome: outcome_for_draw(draw, thresholds),
            }
        }
        Contact::PlayerBody(player) => CombatResolution::PlayerCaught { player },
        Contact::Reward(_) | Contact::Other(_) => CombatResolution::Ignored,
    }
}
