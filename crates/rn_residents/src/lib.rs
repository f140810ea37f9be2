use bevy::prelude::*;
use rn_core::is_authority;

pub mod components;
pub mod config;
pub mod selection;
pub mod spawn;

pub use components::{Home, PotentialHome};
pub use config::{
    ResidentSpawnConfig, ResidentSpawnTimer, SpawnRng, SPAWN_CHECK_DELAY, VERTICAL_SPAWN_OFFSET,
};
pub use selection::choose_resident_prefab;
pub use spawn::{
    run_spawn_pass, spawn_resident, spawn_residents, ResidentSpawned, SpawnPassReport,
    SpawnedResident,
};

/// Resident plugin for Renegades.
/// Periodically fills potential homes with residents drawn from the prefab catalog.
/// Runs on the authority only.
///
/// Expects `RnCorePlugin` (network role) and `RnPrefabPlugin` (catalog) to be added too.
pub struct RnResidentsPlugin;

impl Plugin for RnResidentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResidentSpawnConfig>()
            .init_resource::<ResidentSpawnTimer>()
            .init_resource::<SpawnRng>()
            .add_event::<ResidentSpawned>()
            .add_systems(Update, spawn_residents.run_if(is_authority));
    }
}
