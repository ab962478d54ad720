//! Bonelink core (engine-agnostic)
//!
//! Contract types shared between the external skeletal-animation engine and
//! the component-tree adapters: bone/skeleton records, the enumerated bone
//! override set, the mount options, and the bone-to-node sync operation.
//! Adapters (Bevy) own component lifecycle and hierarchy; this crate owns
//! the semantics.

pub mod bone;
pub mod driver;
pub mod error;
pub mod mount;
pub mod node;
pub mod overrides;
pub mod skeleton;
pub mod sync;

// Re-exports for consumers (adapters)
pub use bone::Bone;
pub use driver::AnimationDriver;
pub use error::BindError;
pub use mount::{mount, MountOptions};
pub use node::{NodeTransform, Vec2};
pub use overrides::BoneOverrides;
pub use skeleton::Skeleton;
pub use sync::{sync_bone, SyncOutcome};
