use bevy::prelude::*;

use crate::components::{AnimatedElement, BoneFollower, Mounted};
use bonelink_core::{mount, sync_bone, BindError, NodeTransform, SyncOutcome};

/// Runs the mount side effect once per [`AnimatedElement`]: starts playback
/// when `autoplay` is set, then tags the entity [`Mounted`].
pub fn mount_animated_elements(
    mut commands: Commands,
    mut elements: Query<(Entity, &mut AnimatedElement), Without<Mounted>>,
) {
    for (entity, mut element) in &mut elements {
        let options = element.options.clone();
        mount(element.driver.as_mut(), &options);
        debug!("mounted animated element {entity:?} (autoplay={})", options.autoplay);
        commands.entity(entity).insert(Mounted);
    }
}

/// Per-pass bone sync for every [`BoneFollower`].
///
/// Resolves the nearest ancestor [`AnimatedElement`], writes the follower's
/// overrides onto the named bone, and mirrors the bone transform onto the
/// follower's single child when it has one. Bone mutation always precedes
/// the child transform copy for a given follower; order across sibling
/// followers is the query's iteration order and carries no contract.
pub fn sync_bone_followers(
    mut elements: Query<&mut AnimatedElement>,
    followers: Query<(Entity, &BoneFollower, Option<&Children>)>,
    parents: Query<&Parent>,
    mut transforms: Query<&mut Transform>,
) {
    for (entity, follower, children) in &followers {
        let element_entity = match resolve_element(entity, &parents, &elements) {
            Ok(found) => found,
            Err(err) => {
                bevy::log::warn_once!("bone follower {entity:?} ('{}'): {err}", follower.name);
                continue;
            }
        };
        let Ok(mut element) = elements.get_mut(element_entity) else {
            continue;
        };
        let skeleton = element.driver.skeleton_mut();

        // Only a sole child is mirrored; its entity is the drawable node.
        let child = match children {
            Some(list) if list.len() == 1 => list.first().copied(),
            _ => None,
        };

        let outcome = match child.and_then(|c| transforms.get_mut(c).ok()) {
            Some(mut transform) => {
                let mut node = NodeTransform::default();
                let outcome =
                    sync_bone(skeleton, &follower.name, &follower.overrides, Some(&mut node));
                if outcome == SyncOutcome::Synced {
                    write_node(&node, &mut transform);
                }
                outcome
            }
            None => sync_bone(skeleton, &follower.name, &follower.overrides, None),
        };

        if outcome == SyncOutcome::BoneNotFound {
            debug!("bone follower {entity:?}: no bone named '{}'", follower.name);
        }
    }
}

/// Walk up the hierarchy to the nearest entity carrying [`AnimatedElement`].
fn resolve_element(
    start: Entity,
    parents: &Query<&Parent>,
    elements: &Query<&mut AnimatedElement>,
) -> Result<Entity, BindError> {
    let mut current = start;
    while let Ok(parent) = parents.get(current) {
        current = parent.get();
        if elements.contains(current) {
            return Ok(current);
        }
    }
    Err(BindError::MissingContext)
}

/// Write a core node transform onto a Bevy [`Transform`].
///
/// Translation z is left to the host (2D layering). The bone's scalar
/// rotation is passed through unchanged as a rotation about Z.
fn write_node(node: &NodeTransform, transform: &mut Transform) {
    transform.translation.x = node.position.x;
    transform.translation.y = node.position.y;
    transform.scale.x = node.scale.x;
    transform.scale.y = node.scale.y;
    transform.rotation = Quat::from_rotation_z(node.rotation);
}
