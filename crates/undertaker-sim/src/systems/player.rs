//! Player system: movement, aim and fire for the player entity.

use hecs::{Entity, World};
use log::trace;

use undertaker_ai::locomotion::{self, aim_depth, movement_intent, PlayerContext};
use undertaker_core::components::Player;
use undertaker_core::enums::InputAction;
use undertaker_core::events::GameEvent;
use undertaker_core::input::InputSource;
use undertaker_core::state::ScoreView;
use undertaker_core::types::Pose;

use crate::collaborators::Camera;
use crate::error::SimError;
use crate::handles::id;
use crate::world_setup;

/// Run one player tick: read input, move, aim through the camera, maybe fire.
pub fn run<I, C>(
    world: &mut World,
    player: Entity,
    dt: f64,
    input: &I,
    camera: &C,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreView,
) -> Result<(), SimError>
where
    I: InputSource + ?Sized,
    C: Camera + ?Sized,
{
    let missing = || SimError::MissingReference {
        what: "player",
        entity: id(player),
    };
    let pose = *world.get::<&Pose>(player).map_err(|_| missing())?;
    let state = (*world.get::<&Player>(player).map_err(|_| missing())?).clone();

    let ctx = PlayerContext {
        pose,
        speed: state.speed,
        fire_cooldown_remaining: state.fire_cooldown_remaining,
        fire_cooldown_period: state.fire_cooldown_period,
        intent: movement_intent(input),
        fire_held: input.is_active(InputAction::Fire),
        dt,
    };
    let cursor = input.cursor_screen_position();
    let update = locomotion::step(&ctx, |position| {
        let depth = aim_depth(position, camera.position(), state.aim_depth_factor);
        camera.unproject(cursor, depth)
    });
    trace!("player aims at {:?}", update.aim_point);

    if let Ok(mut current) = world.get::<&mut Pose>(player) {
        *current = update.pose;
    }
    if let Ok(mut current) = world.get::<&mut Player>(player) {
        current.fire_cooldown_remaining = update.fire_cooldown_remaining;
    }

    if update.fired {
        let owner = id(player);
        let projectile =
            world_setup::spawn_projectile(world, update.pose, owner, state.projectile_speed);
        events.push(GameEvent::ProjectileFired {
            projectile: id(projectile),
            owner,
            position: update.pose.position,
            direction: update.pose.forward(),
            speed: state.projectile_speed,
        });
        score.projectiles_fired += 1;
    }
    Ok(())
}
