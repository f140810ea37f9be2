use bevy::prelude::*;

pub mod authority;
pub mod coords;

pub use authority::{is_authority, NetworkRole};
pub use coords::{raised, BlockCoord, UP};

/// Core plugin providing foundational types for Renegades.
pub struct RnCorePlugin;

impl Plugin for RnCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NetworkRole>();
    }
}
