use bevy::prelude::*;
use std::path::PathBuf;

pub mod config_io;
pub mod io;
pub mod prefab_io;

pub use config_io::{
    load_spawn_config, load_spawn_config_or_default, save_spawn_config, SPAWN_CONFIG_FILE,
};
pub use io::{read_ron, write_ron, PersistenceError};
pub use prefab_io::{
    list_prefab_files, load_catalog_dir, load_prefabs, save_prefabs, PREFABS_DIR,
};

/// Default content root.
pub const CONTENT_DIR: &str = "assets";

/// Persistence plugin for Renegades.
/// Loads the spawner config and prefab catalog from RON files under `content_dir`.
///
/// Add it before the gameplay plugins so their `init_resource` calls keep the loaded values.
pub struct RnPersistencePlugin {
    pub content_dir: PathBuf,
}

impl Default for RnPersistencePlugin {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(CONTENT_DIR),
        }
    }
}

impl Plugin for RnPersistencePlugin {
    fn build(&self, app: &mut App) {
        let config = load_spawn_config_or_default(&self.content_dir.join(SPAWN_CONFIG_FILE));
        app.insert_resource(config);

        let prefabs_dir = self.content_dir.join(PREFABS_DIR);
        match load_catalog_dir(&prefabs_dir) {
            Ok(catalog) => {
                info!(
                    "Loaded {} prefabs ({} residents) from {}",
                    catalog.len(),
                    catalog.list_residents().len(),
                    prefabs_dir.display()
                );
                app.insert_resource(catalog);
            }
            Err(err) => warn!("Failed to load prefabs from {}: {}", prefabs_dir.display(), err),
        }
    }
}
