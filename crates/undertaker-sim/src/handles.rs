//! Conversions between hecs entities and public `EntityId`s.

use hecs::{Entity, World};

use undertaker_core::components::{Agent, Player, Projectile, Reward, SpawnScheduler};
use undertaker_core::enums::EntityKind;
use undertaker_core::types::EntityId;

pub fn id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// `None` for bit patterns that can never name an entity.
pub fn entity(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

/// Category of a live entity, from the components it carries.
pub fn kind_of(world: &World, entity: Entity) -> EntityKind {
    if world.get::<&Agent>(entity).is_ok() {
        EntityKind::Agent
    } else if world.get::<&Projectile>(entity).is_ok() {
        EntityKind::Projectile
    } else if world.get::<&Reward>(entity).is_ok() {
        EntityKind::Reward
    } else if world.get::<&Player>(entity).is_ok() {
        EntityKind::Player
    } else if world.get::<&SpawnScheduler>(entity).is_ok() {
        EntityKind::Spawner
    } else {
        EntityKind::Unknown
    }
}
