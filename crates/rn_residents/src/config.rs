use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seconds between two spawn passes.
pub const SPAWN_CHECK_DELAY: f32 = 30.0;

/// Height above the building position at which residents appear.
pub const VERTICAL_SPAWN_OFFSET: f32 = 2.0;

/// Tunables for the resident spawner.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidentSpawnConfig {
    /// Seconds that must elapse (strictly exceeded) before a spawn pass runs.
    pub spawn_interval: f32,
    /// Vertical distance between a building and its newly spawned resident.
    pub vertical_offset: f32,
    /// Fixed seed for template selection. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ResidentSpawnConfig {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_CHECK_DELAY,
            vertical_offset: VERTICAL_SPAWN_OFFSET,
            rng_seed: None,
        }
    }
}

/// Accumulates frame time and reports when a spawn pass is due.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ResidentSpawnTimer {
    elapsed: f32,
}

impl ResidentSpawnTimer {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Add `delta` seconds. Returns true and resets to zero once `interval` is exceeded.
    pub fn tick(&mut self, delta: f32, interval: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed > interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// Random source used for resident template selection.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub ChaCha8Rng);

impl SpawnRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

impl FromWorld for SpawnRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<ResidentSpawnConfig>()
            .and_then(|config| config.rng_seed);
        Self::new(seed)
    }
}
