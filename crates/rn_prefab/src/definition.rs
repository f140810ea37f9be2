use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Resident profile carried by resident-producing prefabs.
///
/// A prefab with a profile instantiates entities carrying a [`Resident`] component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentProfile {
    /// Name shown for residents of this type.
    pub display_name: String,
    /// Movement speed in blocks per second.
    pub walk_speed: f32,
}

impl Default for ResidentProfile {
    fn default() -> Self {
        Self {
            display_name: "Villager".to_string(),
            walk_speed: 1.5,
        }
    }
}

/// Immutable archetype used to instantiate new entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefab {
    /// Unique prefab name (e.g. "renegades:villager").
    pub name: String,
    /// Uniform scale applied to the spawned transform.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Present on resident-producing prefabs.
    #[serde(default)]
    pub resident: Option<ResidentProfile>,
}

fn default_scale() -> f32 {
    1.0
}

impl Prefab {
    /// A plain prefab that produces no residents.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: default_scale(),
            resident: None,
        }
    }

    /// A resident-producing prefab.
    pub fn resident(name: impl Into<String>, profile: ResidentProfile) -> Self {
        Self {
            resident: Some(profile),
            ..Self::new(name)
        }
    }

    pub fn is_resident(&self) -> bool {
        self.resident.is_some()
    }
}

/// Component present on every entity instantiated from a resident-producing prefab.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Resident {
    /// Name of the prefab this resident was built from.
    pub prefab: String,
    pub display_name: String,
    pub walk_speed: f32,
}

/// Read-only registry of prefabs known to the simulation.
///
/// Prefabs are registered by content loading; gameplay systems only query it.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefabCatalog {
    prefabs: Vec<Prefab>,
}

impl PrefabCatalog {
    pub fn new(prefabs: Vec<Prefab>) -> Self {
        let mut catalog = Self::default();
        for prefab in prefabs {
            catalog.register(prefab);
        }
        catalog
    }

    /// Register a prefab, replacing any existing prefab with the same name.
    pub fn register(&mut self, prefab: Prefab) {
        match self.prefabs.iter_mut().find(|p| p.name == prefab.name) {
            Some(existing) => *existing = prefab,
            None => self.prefabs.push(prefab),
        }
    }

    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }

    /// All prefabs tagged as resident-producing, in registration order.
    pub fn list_residents(&self) -> Vec<&Prefab> {
        self.prefabs.iter().filter(|p| p.is_resident()).collect()
    }
}
