use bevy::prelude::*;

use crate::definition::{Prefab, Resident};

/// Mutable staging area for an entity instantiated from a [`Prefab`].
///
/// Components can be inspected and changed before [`EntityBuilder::build`]
/// commits the entity to the world.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    name: Name,
    transform: Transform,
    resident: Option<Resident>,
}

impl EntityBuilder {
    /// Start building an entity with the prefab's preset components.
    pub fn from_prefab(prefab: &Prefab) -> Self {
        let resident = prefab.resident.as_ref().map(|profile| Resident {
            prefab: prefab.name.clone(),
            display_name: profile.display_name.clone(),
            walk_speed: profile.walk_speed,
        });

        Self {
            name: Name::new(prefab.name.clone()),
            transform: Transform::from_scale(Vec3::splat(prefab.scale)),
            resident,
        }
    }

    /// Set the world position of the entity being built.
    pub fn set_world_position(&mut self, position: Vec3) -> &mut Self {
        self.transform.translation = position;
        self
    }

    /// Commit the entity, attaching `extra` on top of the prefab components.
    pub fn build(self, commands: &mut Commands, extra: impl Bundle) -> Entity {
        let mut entity = commands.spawn((self.name, self.transform, extra));
        if let Some(resident) = self.resident {
            entity.insert(resident);
        }
        entity.id()
    }
}
