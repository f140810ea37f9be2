use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction pointing away from the ground in world space.
pub const UP: Vec3 = Vec3::Y;

/// Integer position of a voxel block in the world grid.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Component, Serialize, Deserialize)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World-space center of this block (blocks are one unit wide).
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32) + Vec3::splat(0.5)
    }
}

/// Shift a world position upward by `height` units, leaving the other axes untouched.
pub fn raised(position: Vec3, height: f32) -> Vec3 {
    position + UP * height
}
