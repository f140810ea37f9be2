use bevy::prelude::*;
use rn_residents::ResidentSpawnConfig;
use std::path::Path;

use crate::io::{read_ron, write_ron, PersistenceError};

/// Spawner config file, relative to the content root.
pub const SPAWN_CONFIG_FILE: &str = "config/resident_spawn.ron";

pub fn save_spawn_config(path: &Path, config: &ResidentSpawnConfig) -> Result<(), PersistenceError> {
    write_ron(path, config)
}

pub fn load_spawn_config(path: &Path) -> Result<ResidentSpawnConfig, PersistenceError> {
    read_ron(path)
}

/// Load the spawner config, falling back to defaults when the file is absent or unreadable.
pub fn load_spawn_config_or_default(path: &Path) -> ResidentSpawnConfig {
    if !path.exists() {
        info!("No spawn config at {}; using defaults", path.display());
        return ResidentSpawnConfig::default();
    }

    match load_spawn_config(path) {
        Ok(config) => config,
        Err(err) => {
            warn!("Failed to load spawn config {}: {}", path.display(), err);
            ResidentSpawnConfig::default()
        }
    }
}
