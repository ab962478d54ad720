//! Bevy adapter for bonelink.
//!
//! Exposes an external skeletal-animation engine's objects as components:
//! [`AnimatedElement`] owns the engine handle on the drawable entity, and
//! [`BoneFollower`] mirrors a named bone onto its single child's transform
//! every update pass. The plugin chains mount before sync so playback starts
//! before the first transform copy of a pass.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{AnimatedElement, BoneFollower, Mounted};
pub use systems::{mount_animated_elements, sync_bone_followers};

// Re-export the core contract types adapters and tests reach for.
pub use bonelink_core::{
    AnimationDriver, BindError, Bone, BoneOverrides, MountOptions, Skeleton, SyncOutcome,
};

pub struct BonelinkPlugin;

impl Plugin for BonelinkPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (mount_animated_elements, sync_bone_followers).chain(),
        );
    }
}
