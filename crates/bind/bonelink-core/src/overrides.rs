//! Enumerated bone override set.
//!
//! The original binding forwarded arbitrary key/value pairs onto the bone
//! record. Here the surface is the explicit set of fields the animation
//! engine recognizes, so an unknown field is a construction-time error
//! instead of an inert write into engine state.

use serde::{Deserialize, Serialize};

use crate::bone::Bone;
use crate::error::BindError;

/// Per-field overrides written onto a named bone before each transform copy.
///
/// `None` fields leave the engine-animated value untouched.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BoneOverrides {
    pub x: Option<f32>,
    pub y: Option<f32>,
    #[serde(rename = "scaleX")]
    pub scale_x: Option<f32>,
    #[serde(rename = "scaleY")]
    pub scale_y: Option<f32>,
    pub rotation: Option<f32>,
    #[serde(rename = "shearX")]
    pub shear_x: Option<f32>,
    #[serde(rename = "shearY")]
    pub shear_y: Option<f32>,
}

impl BoneOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stringly-keyed pairs using the engine's field names.
    /// Unknown keys are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, BindError>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let mut overrides = Self::new();
        for (key, value) in pairs {
            match key {
                "x" => overrides.x = Some(value),
                "y" => overrides.y = Some(value),
                "scaleX" => overrides.scale_x = Some(value),
                "scaleY" => overrides.scale_y = Some(value),
                "rotation" => overrides.rotation = Some(value),
                "shearX" => overrides.shear_x = Some(value),
                "shearY" => overrides.shear_y = Some(value),
                other => return Err(BindError::UnknownBoneField(other.to_string())),
            }
        }
        Ok(overrides)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Assign every present field onto the bone.
    pub fn apply(&self, bone: &mut Bone) {
        if let Some(x) = self.x {
            bone.x = x;
        }
        if let Some(y) = self.y {
            bone.y = y;
        }
        if let Some(scale_x) = self.scale_x {
            bone.scale_x = scale_x;
        }
        if let Some(scale_y) = self.scale_y {
            bone.scale_y = scale_y;
        }
        if let Some(rotation) = self.rotation {
            bone.rotation = rotation;
        }
        if let Some(shear_x) = self.shear_x {
            bone.shear_x = shear_x;
        }
        if let Some(shear_y) = self.shear_y {
            bone.shear_y = shear_y;
        }
    }
}
