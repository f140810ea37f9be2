use bevy::prelude::*;

pub mod builder;
pub mod definition;

pub use builder::EntityBuilder;
pub use definition::{Prefab, PrefabCatalog, Resident, ResidentProfile};

/// Prefab plugin for Renegades.
/// Owns the prefab catalog that gameplay systems instantiate entities from.
pub struct RnPrefabPlugin;

impl Plugin for RnPrefabPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PrefabCatalog>();
    }
}
