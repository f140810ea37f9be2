use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use rn_core::BlockCoord;
use rn_prefab::{Prefab, PrefabCatalog, ResidentProfile};
use rn_residents::{PotentialHome, ResidentSpawned};
use std::time::Duration;

/// Simulation tick rate of the headless host.
const TICKS_PER_SECOND: f64 = 20.0;

/// Demo buildings: (block position, capacity).
const DEMO_BUILDINGS: &[(BlockCoord, u32)] = &[
    (BlockCoord::new(0, 64, 0), 2),
    (BlockCoord::new(16, 66, -8), 4),
    (BlockCoord::new(-24, 63, 12), 1),
];

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / TICKS_PER_SECOND,
            ))),
            LogPlugin::default(),
            // Buildings may sit under parents; spawning reads their world position
            TransformPlugin,
        ))
        // Content must load before the gameplay plugins initialise their defaults
        .add_plugins(rn_persistence::RnPersistencePlugin::default())
        .add_plugins((
            rn_core::RnCorePlugin,
            rn_prefab::RnPrefabPlugin,
            rn_residents::RnResidentsPlugin,
        ))
        .add_systems(Startup, (register_fallback_prefabs, spawn_demo_buildings).chain())
        .add_systems(Update, log_resident_spawns)
        .run();
}

/// Registers a villager prefab when no resident prefabs were loaded from disk.
fn register_fallback_prefabs(mut catalog: ResMut<PrefabCatalog>) {
    if !catalog.list_residents().is_empty() {
        return;
    }

    info!("No resident prefabs on disk; registering the default villager");
    catalog.register(Prefab::resident(
        "renegades:villager",
        ResidentProfile::default(),
    ));
}

fn spawn_demo_buildings(mut commands: Commands) {
    for (block, capacity) in DEMO_BUILDINGS {
        commands.spawn((
            Name::new(format!("house@{},{},{}", block.x, block.y, block.z)),
            *block,
            PotentialHome::new(*capacity),
            Transform::from_translation(block.center()),
        ));
    }
    info!("Spawned {} demo buildings", DEMO_BUILDINGS.len());
}

fn log_resident_spawns(mut events: EventReader<ResidentSpawned>, names: Query<&Name>) {
    for event in events.read() {
        let home = names
            .get(event.home)
            .map(|n| n.as_str().to_string())
            .unwrap_or_else(|_| format!("{:?}", event.home));
        info!("{} moved into {}", event.prefab, home);
    }
}
