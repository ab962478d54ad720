//! Bone record mirroring the external engine's mutable bone state.

use serde::{Deserialize, Serialize};

/// A named joint within a skeleton.
///
/// This is a live mirror of the animation engine's bone record: the engine
/// advances these fields during playback, and [`BoneOverrides`] writes into
/// them from the component side. Field names follow the engine's JSON
/// serialization (`scaleX`, `shearY`, …).
///
/// [`BoneOverrides`]: crate::overrides::BoneOverrides
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bone {
    pub name: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default = "one", rename = "scaleX")]
    pub scale_x: f32,
    #[serde(default = "one", rename = "scaleY")]
    pub scale_y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default, rename = "shearX")]
    pub shear_x: f32,
    #[serde(default, rename = "shearY")]
    pub shear_y: f32,
}

fn one() -> f32 {
    1.0
}

impl Bone {
    /// A bone at the setup pose origin (unit scale, no rotation).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }
}
