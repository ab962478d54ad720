//! Bone-to-node sync: the one behavioral contract of the binding layer.

use crate::node::NodeTransform;
use crate::overrides::BoneOverrides;
use crate::skeleton::Skeleton;

/// What a sync pass did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Overrides applied and the child node transform was rewritten.
    Synced,
    /// No bone with that name; nothing was touched.
    BoneNotFound,
    /// Overrides applied, but there was no single child to mirror onto.
    NoChild,
}

/// Run one sync pass for a named bone.
///
/// Overrides are written onto the bone first; the child transform copy (when
/// a child is present) always observes the overridden values. Position is
/// mirrored through `abs()` so reflected bones land at a non-negative screen
/// offset; scale and rotation keep their sign. The asymmetry is inherited
/// behavior and must not be "corrected" here.
///
/// A missing bone is a supported configuration (optional bone targeting),
/// not an error: the pass stops before any mutation.
pub fn sync_bone(
    skeleton: &mut Skeleton,
    name: &str,
    overrides: &BoneOverrides,
    child: Option<&mut NodeTransform>,
) -> SyncOutcome {
    let Some(bone) = skeleton.find_bone_mut(name) else {
        log::trace!("bone '{name}' not found; skipping sync");
        return SyncOutcome::BoneNotFound;
    };

    overrides.apply(bone);

    let Some(node) = child else {
        return SyncOutcome::NoChild;
    };

    node.position.x = bone.x.abs();
    node.position.y = bone.y.abs();
    node.scale.x = bone.scale_x;
    node.scale.y = bone.scale_y;
    node.rotation = bone.rotation;
    SyncOutcome::Synced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bone::Bone;
    use crate::node::Vec2;

    fn skeleton_with(bone: Bone) -> Skeleton {
        Skeleton::from_bones(vec![Bone::new("root"), bone])
    }

    #[test]
    fn mirrors_bone_with_absolute_position() {
        let mut bone = Bone::new("arm");
        bone.x = -5.0;
        bone.y = 10.0;
        bone.scale_x = 1.0;
        bone.scale_y = -1.0;
        bone.rotation = 45.0;
        let mut skeleton = skeleton_with(bone);

        let mut node = NodeTransform::default();
        let outcome = sync_bone(&mut skeleton, "arm", &BoneOverrides::new(), Some(&mut node));

        assert_eq!(outcome, SyncOutcome::Synced);
        assert_eq!(node.position, Vec2::new(5.0, 10.0));
        assert_eq!(node.scale, Vec2::new(1.0, -1.0));
        assert_eq!(node.rotation, 45.0);
    }

    #[test]
    fn missing_bone_touches_nothing() {
        let mut skeleton = skeleton_with(Bone::new("arm"));
        let before = skeleton.clone();
        let mut node = NodeTransform {
            position: Vec2::new(7.0, 8.0),
            scale: Vec2::new(2.0, 2.0),
            rotation: 1.5,
        };
        let node_before = node;

        let overrides = BoneOverrides {
            x: Some(99.0),
            ..Default::default()
        };
        let outcome = sync_bone(&mut skeleton, "tail", &overrides, Some(&mut node));

        assert_eq!(outcome, SyncOutcome::BoneNotFound);
        assert_eq!(skeleton, before);
        assert_eq!(node, node_before);
    }

    #[test]
    fn overrides_land_before_the_copy() {
        let mut skeleton = skeleton_with(Bone::new("arm"));
        let overrides = BoneOverrides {
            x: Some(-3.0),
            rotation: Some(90.0),
            ..Default::default()
        };

        let mut node = NodeTransform::default();
        sync_bone(&mut skeleton, "arm", &overrides, Some(&mut node));

        assert_eq!(skeleton.find_bone("arm").unwrap().x, -3.0);
        assert_eq!(node.position.x, 3.0);
        assert_eq!(node.rotation, 90.0);
    }

    #[test]
    fn overrides_apply_even_without_a_child() {
        let mut skeleton = skeleton_with(Bone::new("arm"));
        let overrides = BoneOverrides {
            y: Some(12.0),
            ..Default::default()
        };

        let outcome = sync_bone(&mut skeleton, "arm", &overrides, None);

        assert_eq!(outcome, SyncOutcome::NoChild);
        assert_eq!(skeleton.find_bone("arm").unwrap().y, 12.0);
    }

    #[test]
    fn sync_is_idempotent_for_fixed_state() {
        let mut bone = Bone::new("arm");
        bone.x = -5.0;
        bone.rotation = 45.0;
        let mut skeleton = skeleton_with(bone);
        let overrides = BoneOverrides {
            scale_x: Some(2.0),
            ..Default::default()
        };

        let mut node = NodeTransform::default();
        sync_bone(&mut skeleton, "arm", &overrides, Some(&mut node));
        let first = node;
        sync_bone(&mut skeleton, "arm", &overrides, Some(&mut node));

        assert_eq!(node, first);
    }
}
