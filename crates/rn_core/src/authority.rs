use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Execution role of this simulation instance.
///
/// Only the authority decides changes to canonical game state. Observers
/// replicate what the authority produces and never run gameplay rules that
/// create or destroy entities.
#[derive(Resource, Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum NetworkRole {
    /// Owns canonical state (dedicated server, or a single-player host).
    #[default]
    Authority,
    /// Remote client mirroring the authority.
    Observer,
}

impl NetworkRole {
    pub fn is_authority(&self) -> bool {
        matches!(self, Self::Authority)
    }
}

/// Run condition for systems registered in authority mode only.
///
/// A missing [`NetworkRole`] resource counts as an observer.
pub fn is_authority(role: Option<Res<NetworkRole>>) -> bool {
    role.is_some_and(|role| role.is_authority())
}
