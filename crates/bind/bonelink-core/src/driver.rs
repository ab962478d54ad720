//! Seam to the external animation engine.

use crate::skeleton::Skeleton;

/// The playback surface an external animation engine exposes to the binding
/// layer.
///
/// The engine owns timelines, blending, and playback advancement; the
/// binding layer only starts playback and reads or overrides live bone
/// state. Object-safe so adapters can store the handle boxed inside a
/// component.
pub trait AnimationDriver: Send + Sync + 'static {
    /// Start playback. Looping and end-of-animation behavior belong to the
    /// engine; the binding layer calls this at most once per mount.
    fn play(&mut self);

    /// The live skeleton this driver animates.
    fn skeleton(&self) -> &Skeleton;

    /// Mutable access to the live skeleton, for bone overrides.
    fn skeleton_mut(&mut self) -> &mut Skeleton;
}
