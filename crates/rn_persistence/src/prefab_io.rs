use bevy::prelude::*;
use rn_prefab::{Prefab, PrefabCatalog};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{read_ron, write_ron, PersistenceError};

/// Default directory for prefab files, relative to the content root.
pub const PREFABS_DIR: &str = "prefabs";

/// Save a list of prefabs to a RON file.
pub fn save_prefabs(path: &Path, prefabs: &[Prefab]) -> Result<(), PersistenceError> {
    write_ron(path, &prefabs)
}

/// Load a list of prefabs from a RON file.
pub fn load_prefabs(path: &Path) -> Result<Vec<Prefab>, PersistenceError> {
    read_ron(path)
}

/// List all prefab files in `dir`, sorted by path.
pub fn list_prefab_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Build a catalog from every prefab file in `dir`.
///
/// Files are applied in path order, so a later file overrides prefabs of the
/// same name from an earlier one. Unreadable files are skipped with a warning;
/// only failing to list `dir` itself is an error.
pub fn load_catalog_dir(dir: &Path) -> Result<PrefabCatalog, PersistenceError> {
    let mut catalog = PrefabCatalog::default();
    for path in list_prefab_files(dir)? {
        match load_prefabs(&path) {
            Ok(prefabs) => {
                for prefab in prefabs {
                    catalog.register(prefab);
                }
            }
            Err(err) => warn!("Skipping prefab file {}: {}", path.display(), err),
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rn_prefab::ResidentProfile;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_prefabs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("residents.ron");
        let prefabs = vec![
            Prefab::resident("renegades:villager", ResidentProfile::default()),
            Prefab::new("renegades:barrel"),
        ];

        save_prefabs(&path, &prefabs).unwrap();
        assert_eq!(load_prefabs(&path).unwrap(), prefabs);
    }

    #[test]
    fn catalog_dir_merges_files_in_order() {
        let dir = tempdir().unwrap();
        save_prefabs(
            &dir.path().join("a_base.ron"),
            &[
                Prefab::resident("renegades:villager", ResidentProfile::default()),
                Prefab::new("renegades:barrel"),
            ],
        )
        .unwrap();
        save_prefabs(
            &dir.path().join("b_override.ron"),
            &[Prefab::new("renegades:villager")],
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a prefab").unwrap();

        let catalog = load_catalog_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.list_residents().is_empty());
    }

    #[test]
    fn missing_dir_gives_empty_catalog() {
        let dir = tempdir().unwrap();
        let catalog = load_catalog_dir(&dir.path().join("nowhere")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_file_does_not_discard_others() {
        let dir = tempdir().unwrap();
        save_prefabs(
            &dir.path().join("residents.ron"),
            &[Prefab::resident("renegades:villager", ResidentProfile::default())],
        )
        .unwrap();
        fs::write(dir.path().join("broken.ron"), "[(name: \"renegades:oops\",").unwrap();

        let catalog = load_catalog_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list_residents()[0].name, "renegades:villager");
    }
}
