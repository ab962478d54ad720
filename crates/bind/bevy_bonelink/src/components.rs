use bevy::prelude::*;

use bonelink_core::{AnimationDriver, BoneOverrides, MountOptions};

/// An animated element: the entity owning this component is the drawable
/// node of one external-engine animated object, and the component carries
/// the engine handle. Bone followers anywhere below this entity in the
/// hierarchy resolve their skeleton from it.
#[derive(Component)]
pub struct AnimatedElement {
    pub driver: Box<dyn AnimationDriver>,
    pub options: MountOptions,
}

impl AnimatedElement {
    pub fn new(driver: impl AnimationDriver) -> Self {
        Self {
            driver: Box::new(driver),
            options: MountOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MountOptions) -> Self {
        self.options = options;
        self
    }
}

/// Inserted after the mount side effect ran. Keeps `play()` at exactly one
/// call per mount even when the schedule runs again.
#[derive(Component, Debug, Clone, Copy)]
pub struct Mounted;

/// Declarative bone follower.
///
/// Each update pass the named bone is looked up in the nearest ancestor
/// [`AnimatedElement`]'s skeleton, the overrides are written onto it, and —
/// when this entity has exactly one child — the bone transform is mirrored
/// onto that child's [`Transform`]. A name that matches no bone is a no-op.
#[derive(Component, Debug, Clone)]
pub struct BoneFollower {
    pub name: String,
    pub overrides: BoneOverrides,
}

impl BoneFollower {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: BoneOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: BoneOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}
