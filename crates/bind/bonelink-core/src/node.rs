//! Transform mirror of a drawable scene node.

use serde::{Deserialize, Serialize};

/// 2D vector for node position and scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The mutable transform surface of a drawable node.
///
/// Adapters translate this into their renderer's node type; the core sync
/// operation only ever writes position, scale, and rotation. Rotation is a
/// raw scalar copied from the bone without unit conversion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NodeTransform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}
