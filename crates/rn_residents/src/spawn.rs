use bevy::prelude::*;
use rand::Rng;
use rn_core::raised;
use rn_prefab::{EntityBuilder, PrefabCatalog};

use crate::components::{Home, PotentialHome};
use crate::config::{ResidentSpawnConfig, ResidentSpawnTimer, SpawnRng};
use crate::selection::choose_resident_prefab;

/// Event fired for every resident spawned into a building.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct ResidentSpawned {
    pub resident: Entity,
    pub home: Entity,
    pub prefab: String,
}

/// A resident created by [`spawn_resident`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedResident {
    pub entity: Entity,
    pub prefab: String,
    pub position: Vec3,
}

/// Outcome of a single spawn pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPassReport {
    pub spawned: usize,
    pub full: usize,
    pub without_template: usize,
    pub without_position: usize,
}

/// Spawn a random resident inside the building at world position `home_position`.
///
/// The resident is placed `vertical_offset` units above the building and
/// linked back to it with a [`Home`]. Returns `None` if the catalog has no
/// resident prefabs.
pub fn spawn_resident(
    commands: &mut Commands,
    catalog: &PrefabCatalog,
    rng: &mut impl Rng,
    home: Entity,
    home_position: Vec3,
    vertical_offset: f32,
) -> Option<SpawnedResident> {
    let prefab = choose_resident_prefab(catalog, rng)?;

    let position = raised(home_position, vertical_offset);
    let mut builder = EntityBuilder::from_prefab(prefab);
    builder.set_world_position(position);

    let entity = builder.build(commands, Home { building: home });

    Some(SpawnedResident {
        entity,
        prefab: prefab.name.clone(),
        position,
    })
}

/// Run the spawn rule once over every potential home.
pub fn run_spawn_pass(
    commands: &mut Commands,
    catalog: &PrefabCatalog,
    rng: &mut impl Rng,
    vertical_offset: f32,
    homes: &mut Query<(Entity, &mut PotentialHome, Option<&GlobalTransform>)>,
    events: &mut EventWriter<ResidentSpawned>,
) -> SpawnPassReport {
    let mut report = SpawnPassReport::default();

    for (building, mut home, transform) in homes.iter_mut() {
        if !home.has_vacancy() {
            report.full += 1;
            continue;
        }

        let Some(transform) = transform else {
            warn!("Potential home {:?} has no world position; skipping resident spawn", building);
            report.without_position += 1;
            continue;
        };

        let Some(resident) = spawn_resident(
            commands,
            catalog,
            rng,
            building,
            transform.translation(),
            vertical_offset,
        ) else {
            report.without_template += 1;
            continue;
        };

        debug!(
            "Spawned {} ({:?}) in {:?} at {:?}",
            resident.prefab, resident.entity, building, resident.position
        );

        home.add_resident(resident.entity);
        events.send(ResidentSpawned {
            resident: resident.entity,
            home: building,
            prefab: resident.prefab,
        });
        report.spawned += 1;
    }

    report
}

/// System that fires a spawn pass every [`ResidentSpawnConfig::spawn_interval`] seconds.
#[allow(clippy::too_many_arguments)]
pub fn spawn_residents(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<ResidentSpawnConfig>,
    catalog: Res<PrefabCatalog>,
    mut timer: ResMut<ResidentSpawnTimer>,
    mut rng: ResMut<SpawnRng>,
    mut homes: Query<(Entity, &mut PotentialHome, Option<&GlobalTransform>)>,
    mut events: EventWriter<ResidentSpawned>,
) {
    if !timer.tick(time.delta_secs(), config.spawn_interval) {
        return;
    }

    let report = run_spawn_pass(
        &mut commands,
        &catalog,
        &mut rng.0,
        config.vertical_offset,
        &mut homes,
        &mut events,
    );

    if report.without_template > 0 {
        debug!(
            "No resident prefabs registered; {} homes left empty this pass",
            report.without_template
        );
    }
    if report.spawned > 0 {
        info!(
            "Spawned {} residents ({} homes full)",
            report.spawned, report.full
        );
    }
}
